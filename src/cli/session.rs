//! The interactive session controller.
//!
//! Drives the state machine in [`crate::cli::state`]: shows the main menu,
//! resolves selections through the catalog, collects parameters, executes
//! through the connector, materializes the result and runs the browse loop.
//! A failed execution is reported and control returns to the main menu; a
//! closed input stream is treated as a quit request.

use crate::catalog::{self, ParamKind, ParamSpec, ParamValue, ReportKind};
use crate::cli::state::{SessionEvent, SessionState};
use crate::db::DbClient;
use crate::display::pagination::BrowseWindow;
use crate::display::renderer::render_window;
use crate::display::result_table::ResultTable;
use crate::display::screen::Screen;
use crate::error::{AppError, InputError, QueryError};
use crate::utils::input::{InputCollector, MenuChoice};
use std::io::{BufReader, Stdin, Stdout};
use std::path::PathBuf;

pub struct Session {
    db: DbClient,
    input: InputCollector<BufReader<Stdin>, Stdout>,
    screen: Screen,
    page_size: usize,
    rebuild_script: PathBuf,
    state: SessionState,
}

/// Turn a closed input stream into `None` so callers can emit a quit event
/// instead of failing the session.
fn or_quit<T>(result: Result<T, InputError>) -> Result<Option<T>, InputError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InputError::StreamClosed) => Ok(None),
        Err(err) => Err(err),
    }
}

impl Session {
    pub fn new(db: DbClient, page_size: usize, rebuild_script: PathBuf) -> Self {
        Self {
            db,
            input: InputCollector::stdio(),
            screen: Screen::stdout(),
            page_size,
            rebuild_script,
            state: SessionState::MainMenu,
        }
    }

    pub async fn run(mut self) -> crate::Result<()> {
        loop {
            let event = match self.state {
                SessionState::MainMenu => self.main_menu()?,
                SessionState::HelpMenu => self.help_menu()?,
                SessionState::QueryResult { selection } => self.run_report(selection).await?,
                SessionState::Quit => {
                    self.db.close().await;
                    return Ok(());
                }
            };
            self.state = self.state.apply(event);
        }
    }

    fn main_menu(&mut self) -> crate::Result<SessionEvent> {
        self.screen.refresh();

        for (index, report) in catalog::REPORTS.iter().enumerate() {
            println!("\t[{:2}] {}", index + 1, report.label);
        }
        println!("\n\t[Q] To exit program.");
        println!("\n\t[H] For help.\n");

        let choice = or_quit(
            self.input
                .prompt_menu_choice("Enter selection", catalog::REPORTS.len()),
        )?;
        Ok(match choice {
            Some(MenuChoice::Report(selection)) => SessionEvent::ReportChosen(selection),
            Some(MenuChoice::Help) => SessionEvent::HelpOpened,
            Some(MenuChoice::Quit) | None => SessionEvent::QuitRequested,
        })
    }

    fn help_menu(&mut self) -> crate::Result<SessionEvent> {
        self.screen.refresh();
        print!("{}", catalog::HELP_TEXT);

        let dismissed = or_quit(
            self.input
                .wait_for_line("\n\tPress Enter to return to main menu... "),
        )?;
        Ok(match dismissed {
            Some(()) => SessionEvent::HelpClosed,
            None => SessionEvent::QuitRequested,
        })
    }

    async fn run_report(&mut self, selection: usize) -> crate::Result<SessionEvent> {
        let report = catalog::lookup(selection)?;
        match report.kind {
            ReportKind::Query { sql, params } => self.run_query(sql, params).await,
            ReportKind::SubSelect {
                heading,
                prompt,
                choices,
            } => {
                self.screen.refresh();
                println!("\t{}\n", heading);
                for (index, choice) in choices.iter().enumerate() {
                    println!("\t[{:2}] {}", index + 1, choice.label);
                }
                println!();

                let Some(pick) =
                    or_quit(self.input.prompt_int_in_range(prompt, 1, choices.len() as i64))?
                else {
                    return Ok(SessionEvent::QuitRequested);
                };
                self.execute_and_browse(choices[pick as usize - 1].sql, &[])
                    .await
            }
            ReportKind::TableDump {
                heading,
                prompt,
                tables,
            } => {
                self.screen.refresh();
                println!("\t{}\n", heading);
                for (index, table) in tables.iter().enumerate() {
                    println!("\t[{:2}] {}", index + 1, table);
                }
                println!();

                let Some(pick) =
                    or_quit(self.input.prompt_int_in_range(prompt, 1, tables.len() as i64))?
                else {
                    return Ok(SessionEvent::QuitRequested);
                };
                let statement = catalog::dump_statement(tables[pick as usize - 1]);
                self.execute_and_browse(&statement, &[]).await
            }
            ReportKind::Rebuild => self.run_rebuild().await,
        }
    }

    async fn run_query(
        &mut self,
        sql: &str,
        params: &[ParamSpec],
    ) -> crate::Result<SessionEvent> {
        let mut values = Vec::with_capacity(params.len());
        for spec in params {
            let Some(value) = self.collect_param(spec)? else {
                return Ok(SessionEvent::QuitRequested);
            };
            values.push(value);
        }
        self.execute_and_browse(sql, &values).await
    }

    fn collect_param(&mut self, spec: &ParamSpec) -> crate::Result<Option<ParamValue>> {
        match spec.kind {
            ParamKind::Text { uppercase } => {
                let Some(text) = or_quit(self.input.prompt_string(spec.prompt))? else {
                    return Ok(None);
                };
                let text = if uppercase { text.to_uppercase() } else { text };
                Ok(Some(ParamValue::Text(text)))
            }
            ParamKind::Int => {
                let Some(value) = or_quit(self.input.prompt_int(spec.prompt))? else {
                    return Ok(None);
                };
                Ok(Some(ParamValue::Int(value)))
            }
        }
    }

    async fn execute_and_browse(
        &mut self,
        sql: &str,
        params: &[ParamValue],
    ) -> crate::Result<SessionEvent> {
        let table = match self.materialize(sql, params).await {
            Ok(table) => table,
            Err(err) => return self.report_failure(err),
        };

        self.screen.refresh();
        self.screen.notice(&format!(
            "SQL query successful. Retrieved {} columns.",
            table.column_count() - 1
        ));
        self.browse(&table)
    }

    async fn materialize(
        &self,
        sql: &str,
        params: &[ParamValue],
    ) -> Result<ResultTable, QueryError> {
        let mut cursor = if params.is_empty() {
            self.db.execute_direct(sql).await?
        } else {
            self.db.execute_report(sql, params).await?
        };
        ResultTable::ingest(cursor.as_mut()).await
    }

    fn browse(&mut self, table: &ResultTable) -> crate::Result<SessionEvent> {
        let mut window = BrowseWindow::new(table.row_count(), self.page_size);
        loop {
            self.screen.refresh();
            print!("{}", render_window(table, window.first_row(), self.page_size));
            println!(
                "\n\t[B] to scroll back a page, [N] to scroll forward a page, [M] to return to menu, [Q] to quit\n"
            );

            let Some(token) = or_quit(self.input.prompt_token("", &["b", "n", "m", "q"]))? else {
                return Ok(SessionEvent::QuitRequested);
            };
            match token.as_str() {
                "b" => window.retreat(),
                "n" => window.advance(),
                "m" => return Ok(SessionEvent::ReturnedToMenu),
                _ => return Ok(SessionEvent::QuitRequested),
            }
        }
    }

    async fn run_rebuild(&mut self) -> crate::Result<SessionEvent> {
        loop {
            self.screen.refresh();
            println!("\tAre you sure you want to rebuild the database?");
            println!("\t[Y] to proceed with rebuild, [M] to return to menu, [Q] to quit\n");

            let Some(token) = or_quit(self.input.prompt_token("", &["y", "m", "q"]))? else {
                return Ok(SessionEvent::QuitRequested);
            };
            match token.as_str() {
                "y" => break,
                "m" => return Ok(SessionEvent::ReturnedToMenu),
                _ => return Ok(SessionEvent::QuitRequested),
            }
        }

        println!("\tRebuilding database...");
        let script = self.rebuild_script.clone();
        match self.db.run_script(&script).await {
            Ok(count) => self.notice_nav(&format!(
                "Database rebuilt successfully ({} statements).",
                count
            )),
            Err(err) => self.report_failure(err),
        }
    }

    /// Show a success notice with menu/quit navigation only; one-shot
    /// administrative actions have no result to browse.
    fn notice_nav(&mut self, message: &str) -> crate::Result<SessionEvent> {
        self.screen.refresh();
        self.screen.notice(message);
        println!("\t[M] to return to menu, [Q] to quit\n");

        let Some(token) = or_quit(self.input.prompt_token("", &["m", "q"]))? else {
            return Ok(SessionEvent::QuitRequested);
        };
        Ok(match token.as_str() {
            "m" => SessionEvent::ReturnedToMenu,
            _ => SessionEvent::QuitRequested,
        })
    }

    fn report_failure(&mut self, err: impl Into<AppError>) -> crate::Result<SessionEvent> {
        let err = err.into();
        self.screen.warn(&format!("{}", err));

        let dismissed = or_quit(
            self.input
                .wait_for_line("\tPress Enter to return to main menu... "),
        )?;
        Ok(match dismissed {
            Some(()) => SessionEvent::ReturnedToMenu,
            None => SessionEvent::QuitRequested,
        })
    }
}
