mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use readmark_config::Config;
use readmark_engine::{
    ParsedDoc, Parser, ParserOptions, SearchOptions, SearchSession, io, outline,
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

enum Mode {
    Browse,
    /// Typing a search query
    Query(String),
}

struct App {
    library_path: PathBuf,
    files: Vec<PathBuf>,
    file_list_state: ListState,
    parser_options: ParserOptions,
    search_options: SearchOptions,
    article: Option<ParsedDoc>,
    error: Option<String>,
    session: Option<SearchSession>,
    mode: Mode,
    scroll: u16,
    follow_focus: bool,
}

impl App {
    fn new(
        library_path: PathBuf,
        parser_options: ParserOptions,
        search_options: SearchOptions,
    ) -> Result<Self> {
        let files = io::scan_markdown_files(&library_path)?;
        log::info!(
            "found {} articles in {}",
            files.len(),
            library_path.display()
        );

        let mut app = Self {
            library_path,
            files,
            file_list_state: ListState::default(),
            parser_options,
            search_options,
            article: None,
            error: None,
            session: None,
            mode: Mode::Browse,
            scroll: 0,
            follow_focus: false,
        };

        // Select first article if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.load_selected();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.load_selected();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.load_selected();
    }

    fn load_selected(&mut self) {
        let Some(path) = self
            .file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
        else {
            return;
        };

        self.scroll = 0;
        let parser = Parser::new(self.parser_options);
        match io::read_article(path) {
            Ok(content) => match parser.parse(&content) {
                Ok(doc) => {
                    self.article = Some(doc);
                    self.error = None;
                }
                Err(e) => {
                    self.article = None;
                    self.error = Some(format!("Error parsing article: {e}"));
                }
            },
            Err(e) => {
                self.article = None;
                self.error = Some(format!("Error reading file: {e}"));
            }
        }

        // Carry the active query over to the newly selected article
        let query = self.session.take().map(|s| s.query().to_string());
        if let Some(query) = query {
            self.run_search(&query);
        }
    }

    fn run_search(&mut self, query: &str) {
        self.session = match &self.article {
            Some(doc) if !query.is_empty() => {
                Some(SearchSession::new(&doc.blocks, query, self.search_options))
            }
            _ => None,
        };
        self.follow_focus = true;
    }

    fn next_match(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.focus_next();
            self.follow_focus = true;
        }
    }

    fn previous_match(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.focus_previous();
            self.follow_focus = true;
        }
    }

    fn clear_search(&mut self) {
        self.session = None;
    }

    fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn display_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.library_path)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn status_line(&self) -> String {
        match (&self.mode, &self.session) {
            (Mode::Query(query), _) => format!("/{query}"),
            (Mode::Browse, Some(session)) if session.is_empty() => {
                format!("No matches for \"{}\"", session.query())
            }
            (Mode::Browse, Some(session)) => format!(
                "Match {}/{} for \"{}\"",
                session.focused_index().map_or(0, |i| i + 1),
                session.len(),
                session.query()
            ),
            (Mode::Browse, None) => String::new(),
        }
    }
}

/// Settings from the config file, or defaults when there is none.
fn load_config() -> Option<Config> {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            None
        }
    }
}

fn options(config: Option<&Config>) -> (ParserOptions, SearchOptions) {
    config.map_or_else(Default::default, |c| {
        (c.parser_options(), c.search_options())
    })
}

fn dump(path: &Path) -> Result<()> {
    let config = load_config();
    let (parser_options, _) = options(config.as_ref());
    let content =
        io::read_article(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = Parser::new(parser_options).parse(&content)?;
    print!("{}", outline::render(&doc.blocks));
    Ok(())
}

fn search(path: &Path, query: &str) -> Result<()> {
    let config = load_config();
    let (parser_options, search_options) = options(config.as_ref());
    let content =
        io::read_article(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = Parser::new(parser_options).parse(&content)?;
    let session = SearchSession::new(&doc.blocks, query, search_options);

    for (i, (block, hits)) in doc
        .blocks
        .iter()
        .zip(session.block_highlights())
        .enumerate()
    {
        if hits.is_empty() {
            continue;
        }
        let text: Vec<char> = block.plain_text().chars().collect();
        for m in hits {
            let found: String = text[m.start..m.end].iter().collect();
            println!(
                "block {i} ({}) {}..{}: {found:?}",
                block.content().name(),
                m.start,
                m.end
            );
        }
    }
    println!("{} matches", session.len());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("dump") if args.len() == 3 => return dump(Path::new(&args[2])),
        Some("search") if args.len() == 4 => return search(Path::new(&args[2]), &args[3]),
        _ => {}
    }

    // Determine library path from CLI args or config file
    let config_path = Config::config_path();
    let config = load_config();

    let library_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        library_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match &config {
            Some(config) => {
                library_path = config.library_path.clone();
                from_config = true;
            }
            None => {
                eprintln!("Error: No library path provided and no config file found");
                eprintln!("Usage: {} <library-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [library-path]", args[0]);
        eprintln!("       {} dump <file>", args[0]);
        eprintln!("       {} search <file> <query>", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_library_dir(&library_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Library path '{}'{} is invalid: {e}",
            library_path.display(),
            source
        );
        process::exit(1);
    }

    let (parser_options, search_options) = options(config.as_ref());
    let mut app = App::new(library_path, parser_options, search_options)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Query mode searches as the user types
        if let Mode::Query(query) = &mut app.mode {
            match key.code {
                KeyCode::Enter => app.mode = Mode::Browse,
                KeyCode::Esc => {
                    app.mode = Mode::Browse;
                    app.clear_search();
                }
                KeyCode::Backspace => {
                    query.pop();
                    let query = query.clone();
                    app.run_search(&query);
                }
                KeyCode::Char(c) => {
                    query.push(c);
                    let query = query.clone();
                    app.run_search(&query);
                }
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Down | KeyCode::Char('j') => app.next_file(),
            KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
            KeyCode::PageDown | KeyCode::Char('d') => app.scroll_down(10),
            KeyCode::PageUp | KeyCode::Char('u') => app.scroll_up(10),
            KeyCode::Char('/') => app.mode = Mode::Query(String::new()),
            KeyCode::Char('n') => app.next_match(),
            KeyCode::Char('N') => app.previous_match(),
            KeyCode::Esc => app.clear_search(),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Article list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| ListItem::new(Line::from(Span::raw(app.display_name(path)))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Articles"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Article panel
    let content_text = match (&app.article, &app.error) {
        (_, Some(error)) => vec![Line::from(error.clone())],
        (Some(doc), None) => {
            let rendered = render::article_lines(&doc.blocks, app.session.as_ref());
            if app.follow_focus {
                if let Some(line) = rendered.focus_line {
                    app.scroll = line.saturating_sub(3).try_into().unwrap_or(u16::MAX);
                }
                app.follow_focus = false;
            }
            rendered.lines
        }
        (None, None) => vec![Line::from("Select an article to read it")],
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Article"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Status and instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Articles | "),
        Span::raw("u/d: Scroll | "),
        Span::raw("/: Search | n/N: Next/Previous match | Esc: Clear"),
    ]);
    let status = Line::from(Span::styled(
        app.status_line(),
        Style::default().fg(Color::Cyan),
    ));

    let help = Paragraph::new(vec![status, help_text]).block(Block::default());
    f.render_widget(help, rows[1]);
}
