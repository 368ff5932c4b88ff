//! Interactive session logic for the task console.
//!
//! This module contains the `ConsoleApp` struct which owns the task store,
//! tracks the current screen, and drives the session as one iterative loop:
//! each screen handler renders its text block, reads input, optionally
//! mutates the store, and returns the next screen. Repeated invalid input
//! re-enters the same screen through the loop rather than recursing.

use std::io::{self, BufRead, Write};

use crate::console::enums::{DetailOrigin, Screen};
use crate::console::input::Console;
use crate::fields::{Difficulty, Status};
use crate::store::{format_difficulty, format_status, TaskStore};

/// One interactive session over an in-memory task store.
pub struct ConsoleApp {
    store: TaskStore,
    user: String,
    screen: Screen,
}

impl ConsoleApp {
    /// Create a session for the given user with an empty store.
    pub fn new(user: &str) -> Self {
        ConsoleApp {
            store: TaskStore::new(),
            user: user.to_string(),
            screen: Screen::Main,
        }
    }

    /// The session's task store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Run the session until the user exits from the main menu.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            self.screen = match self.screen {
                Screen::Main => self.main_menu(console)?,
                Screen::Filter => self.filter_menu(console)?,
                Screen::List(filter) => self.list_view(console, filter)?,
                Screen::Search => self.search_view(console)?,
                Screen::Create => self.create_view(console)?,
                Screen::Detail { id, origin } => self.detail_view(console, id, origin)?,
                Screen::Edit { id, origin } => self.edit_view(console, id, origin)?,
                Screen::Exit => break,
            };
        }
        Ok(())
    }

    /// Entry screen: greeting plus the four top-level options.
    fn main_menu<R: BufRead, W: Write>(
        &mut self,
        c: &mut Console<R, W>,
    ) -> io::Result<Screen> {
        c.clear()?;
        c.line(&format!("Hola {}!\n", self.user))?;
        c.line("1. Ver tareas")?;
        c.line("2. Buscar tarea")?;
        c.line("3. Crear tarea")?;
        c.line("0. Salir\n")?;

        let option = c.prompt("> ")?;
        match option.as_str() {
            "1" => Ok(Screen::Filter),
            "2" => Ok(Screen::Search),
            "3" => Ok(Screen::Create),
            "0" => {
                c.line("Chau!")?;
                Ok(Screen::Exit)
            }
            _ => {
                c.line("Opción no válida")?;
                c.pause()?;
                Ok(Screen::Main)
            }
        }
    }

    /// Status filter sub-menu. Listing always comes back here afterwards.
    fn filter_menu<R: BufRead, W: Write>(
        &mut self,
        c: &mut Console<R, W>,
    ) -> io::Result<Screen> {
        c.clear()?;
        c.line("1. Todas")?;
        c.line("2. Pendientes")?;
        c.line("3. En curso")?;
        c.line("4. Terminadas")?;
        c.line("0. Volver\n")?;

        let option = c.prompt("> ")?;
        match option.as_str() {
            "1" => Ok(Screen::List(None)),
            "2" => Ok(Screen::List(Some(Status::Pending))),
            "3" => Ok(Screen::List(Some(Status::InProgress))),
            // Cancelled tasks have no filter option; they only show under "Todas".
            "4" => Ok(Screen::List(Some(Status::Done))),
            "0" => Ok(Screen::Main),
            _ => {
                c.line("Opción no válida")?;
                c.pause()?;
                Ok(Screen::Filter)
            }
        }
    }

    /// Numbered task listing, optionally restricted to one status.
    fn list_view<R: BufRead, W: Write>(
        &mut self,
        c: &mut Console<R, W>,
        filter: Option<Status>,
    ) -> io::Result<Screen> {
        c.clear()?;
        let header = match filter {
            Some(status) => format!("Tareas {}", format_status(status)),
            None => "Todas tus tareas".to_string(),
        };
        c.line(&header)?;
        c.line("---------------------------")?;

        let visible: Vec<u64> = {
            let tasks = self.store.filter(filter);
            if tasks.is_empty() {
                c.line("No hay tareas")?;
                c.pause()?;
                return Ok(Screen::Filter);
            }
            for (i, task) in tasks.iter().enumerate() {
                c.line(&format!(
                    "[{}] {} | {} | Vence: {}",
                    i + 1,
                    task.title,
                    format_status(task.status),
                    task.due
                ))?;
            }
            tasks.iter().map(|t| t.id).collect()
        };

        let selection = c.prompt("\nVer detalle (número o 0 para volver): ")?;
        // "0", out-of-range and non-numeric selections all resume the filter
        // menu without complaint.
        match parse_selection(&selection, visible.len()) {
            Some(n) => Ok(Screen::Detail {
                id: visible[n - 1],
                origin: DetailOrigin::Listing,
            }),
            None => Ok(Screen::Filter),
        }
    }

    /// Case-insensitive title search; results show titles only.
    fn search_view<R: BufRead, W: Write>(
        &mut self,
        c: &mut Console<R, W>,
    ) -> io::Result<Screen> {
        c.clear()?;
        let term = c.prompt("Buscar título: ")?;

        let matches: Vec<u64> = {
            let results = self.store.search(&term);
            if results.is_empty() {
                c.line("No se encontraron tareas.")?;
                c.pause()?;
                return Ok(Screen::Main);
            }
            c.line("\nResultados:\n")?;
            for (i, task) in results.iter().enumerate() {
                c.line(&format!("[{}] {}", i + 1, task.title))?;
            }
            results.iter().map(|t| t.id).collect()
        };

        let selection = c.prompt("\nVer detalle (número o 0 para volver): ")?;
        // Unlike the listing flow, anything that is not a valid selection
        // (including "0") falls through to the main menu.
        match parse_selection(&selection, matches.len()) {
            Some(n) => Ok(Screen::Detail {
                id: matches[n - 1],
                origin: DetailOrigin::Search,
            }),
            None => Ok(Screen::Main),
        }
    }

    /// Sequential prompts for the three user-supplied fields. Status,
    /// difficulty and creation date are forced by the store.
    fn create_view<R: BufRead, W: Write>(
        &mut self,
        c: &mut Console<R, W>,
    ) -> io::Result<Screen> {
        c.clear()?;
        let title = c.prompt("Título: ")?;
        let description = c.prompt("Descripción: ")?;
        let due = c.prompt("Vencimiento (DD/MM/AAAA): ")?;

        self.store.add(&title, &description, &due);
        c.line("\nTarea creada!")?;
        c.pause()?;
        Ok(Screen::Main)
    }

    /// Full six-field view of one task with edit/delete/return actions.
    fn detail_view<R: BufRead, W: Write>(
        &mut self,
        c: &mut Console<R, W>,
        id: u64,
        origin: DetailOrigin,
    ) -> io::Result<Screen> {
        let Some(task) = self.store.get(id) else {
            // Unreachable through normal navigation; resume where the view
            // was opened from.
            return Ok(origin.resume_screen());
        };

        c.clear()?;
        c.line("=== Detalle de la tarea ===")?;
        c.line(&format!("Título: {}", task.title))?;
        c.line(&format!("Descripción: {}", task.description))?;
        c.line(&format!("Estado: {}", format_status(task.status)))?;
        c.line(&format!("Dificultad: {}", format_difficulty(task.difficulty)))?;
        c.line(&format!("Vencimiento: {}", task.due))?;
        c.line(&format!("Creación: {}", task.created))?;
        c.line("\n[E] Editar | [D] Eliminar | [0] Volver")?;

        let op = c.prompt("> ")?;
        match op.to_lowercase().as_str() {
            "e" => Ok(Screen::Edit { id, origin }),
            "d" => {
                let confirm = c.prompt("¿Seguro? (s/n): ")?;
                if confirm.to_lowercase() == "s" {
                    self.store.remove(id);
                    c.line("Tarea eliminada")?;
                    c.pause()?;
                }
                // Confirmed or declined, the delete prompt hands control back
                // to the main menu, not to the screen that opened the detail.
                Ok(Screen::Main)
            }
            _ => Ok(origin.resume_screen()),
        }
    }

    /// In-place edit of the four mutable fields, one prompt each. Every field
    /// commits as soon as its line is read; an invalid later entry does not
    /// undo an earlier one. Continues below the detail block without
    /// clearing, and always returns to the detail view.
    fn edit_view<R: BufRead, W: Write>(
        &mut self,
        c: &mut Console<R, W>,
        id: u64,
        origin: DetailOrigin,
    ) -> io::Result<Screen> {
        let Some(task) = self.store.get_mut(id) else {
            return Ok(origin.resume_screen());
        };

        let description =
            c.prompt(&format!("Nueva descripción (actual: {}): ", task.description))?;
        if !description.trim().is_empty() {
            task.description = description;
        }

        let status =
            c.prompt("Nuevo estado [P]endiente/[E]n curso/[T]erminada/[C]ancelada: ")?;
        if let Some(new_status) = Status::from_code(&status) {
            task.status = new_status;
        }

        let difficulty = c.prompt("Dificultad [1] fácil / [2] media / [3] difícil: ")?;
        if let Some(new_difficulty) = Difficulty::from_choice(&difficulty) {
            task.difficulty = new_difficulty;
        }

        let due = c.prompt(&format!("Nuevo vencimiento (actual {}): ", task.due))?;
        if !due.trim().is_empty() {
            task.due = due;
        }

        c.line("\nTarea actualizada!")?;
        c.pause()?;
        Ok(Screen::Detail { id, origin })
    }
}

/// Parse a 1-based display selection, accepting it only when within range.
fn parse_selection(input: &str, len: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(n),
        _ => None,
    }
}
