// src/app.rs
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::catalog::{self, Catalog, FilterSpec, FILTER_SPECS};
use crate::export::{self, EXPORT_HEADERS};
use crate::opener;

pub const DEFAULT_EXPORT_NAME: &str = "file-list.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    DirPrompt { input: String },
    ExportPrompt { input: String },
}

// one scan's worth of state, replaced wholesale on every successful scan
#[derive(Debug, Clone)]
pub struct Session {
    pub directory: PathBuf,
    pub filter_index: usize,
    pub catalog: Catalog,
}

impl Session {
    pub fn filter(&self) -> &'static FilterSpec {
        &FILTER_SPECS[self.filter_index]
    }
}

pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub selected: usize,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(start_dir: PathBuf) -> Self {
        let mut app = App {
            session: Session {
                directory: start_dir,
                filter_index: 0,
                catalog: Catalog::default(),
            },
            mode: Mode::Browse,
            selected: 0,
            status: None,
            should_quit: false,
        };
        app.rescan(app.session.directory.clone(), app.session.filter_index);
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if matches!(self.mode, Mode::Browse) {
            self.handle_browse_key(key);
        } else {
            self.handle_prompt_key(key);
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Tab | KeyCode::Char('f') => {
                let next = (self.session.filter_index + 1) % FILTER_SPECS.len();
                self.rescan(self.session.directory.clone(), next);
            }
            KeyCode::Char('r') => {
                self.rescan(self.session.directory.clone(), self.session.filter_index);
            }
            KeyCode::Char('g') => {
                self.mode = Mode::DirPrompt {
                    input: self.session.directory.display().to_string(),
                };
            }
            KeyCode::Char('e') => {
                self.mode = Mode::ExportPrompt {
                    input: DEFAULT_EXPORT_NAME.to_string(),
                };
            }
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => self.commit_prompt(),
            KeyCode::Backspace => {
                if let Some(input) = self.prompt_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.prompt_input_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn prompt_input_mut(&mut self) -> Option<&mut String> {
        match &mut self.mode {
            Mode::DirPrompt { input } | Mode::ExportPrompt { input } => Some(input),
            Mode::Browse => None,
        }
    }

    fn commit_prompt(&mut self) {
        let mode = std::mem::replace(&mut self.mode, Mode::Browse);
        match mode {
            Mode::DirPrompt { input } => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    self.status = Some("no directory given".to_string());
                    return;
                }
                self.rescan(PathBuf::from(trimmed), self.session.filter_index);
            }
            Mode::ExportPrompt { input } => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    self.status = Some("no export path given".to_string());
                    return;
                }
                self.export_to(PathBuf::from(trimmed));
            }
            Mode::Browse => {}
        }
    }

    // a failed scan leaves the previous session, and its catalog, on screen
    fn rescan(&mut self, directory: PathBuf, filter_index: usize) {
        match catalog::build(&directory, &FILTER_SPECS[filter_index]) {
            Ok(catalog) => {
                self.selected = 0;
                self.status = Some(format!(
                    "{} files in {}",
                    catalog.len(),
                    directory.display()
                ));
                self.session = Session {
                    directory,
                    filter_index,
                    catalog,
                };
            }
            Err(err) => {
                warn!("scan failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    fn export_to(&mut self, destination: PathBuf) {
        match export::write_catalog(&self.session.catalog, &EXPORT_HEADERS, &destination) {
            Ok(()) => {
                self.status = Some(format!(
                    "exported {} rows to {}",
                    self.session.catalog.len(),
                    destination.display()
                ));
            }
            Err(err) => {
                warn!("export failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    fn open_selected(&mut self) {
        let row = match self.session.catalog.rows.get(self.selected) {
            Some(row) => row,
            None => {
                self.status = Some("nothing selected".to_string());
                return;
            }
        };
        let path = self.session.directory.join(&row.name);
        let name = row.name.clone();
        match opener::open_path(&path) {
            Ok(()) => self.status = Some(format!("opened {}", name)),
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn move_selection(&mut self, delta: i32) {
        let len = self.session.catalog.len();
        if len == 0 {
            return;
        }
        let target = (self.selected as i32 + delta).clamp(0, len as i32 - 1);
        self.selected = target as usize;
    }
}
