//! The interactive menu loop

use super::input::{InputError, LineInput};
use super::responder::InteractiveResponder;
use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::ReportFormatter;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tally_application::{
    AddQuestionUseCase, ConductProgressNotifier, ConductSurveyUseCase, CreateSurveyUseCase,
    NoConductProgress, PublishError, PublishResultsUseCase, QuestionDraft, ViewSurveyError,
    ViewSurveyUseCase,
};
use tally_domain::{Catalog, DisplayEntry, NotFoundError, ReportFormat};
use thiserror::Error;
use tracing::{debug, info, warn};

const INVALID_OPTION_COUNT: &str = "Invalid option count. Skipping question.";

/// Errors that end a menu session
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),
}

/// Entries of the main menu, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    CreateSurvey,
    AddQuestions,
    ViewSurvey,
    ConductSurvey,
    PublishResults,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 6] = [
        MenuItem::CreateSurvey,
        MenuItem::AddQuestions,
        MenuItem::ViewSurvey,
        MenuItem::ConductSurvey,
        MenuItem::PublishResults,
        MenuItem::Exit,
    ];

    fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    fn label(&self) -> &'static str {
        match self {
            MenuItem::CreateSurvey => "Create new survey",
            MenuItem::AddQuestions => "Add question to existing survey",
            MenuItem::ViewSurvey => "View survey and all its questions",
            MenuItem::ConductSurvey => "Conduct a survey",
            MenuItem::PublishResults => "Publish survey results",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Whether the loop keeps going after a menu action
enum Flow {
    Continue,
    Exit,
}

/// Interactive survey session over any line-based input and output
pub struct MenuSession<R, W> {
    input: LineInput<R>,
    out: W,
    catalog: Catalog,
    formatter: ConsoleFormatter,
    format: ReportFormat,
    progress: Box<dyn ConductProgressNotifier>,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    /// Create a session with an empty catalog
    pub fn new(reader: R, out: W, config: &OutputConfig) -> Self {
        Self {
            input: LineInput::new(reader),
            out,
            catalog: Catalog::new(),
            formatter: ConsoleFormatter::new(config.style),
            format: config.format,
            progress: Box::new(NoConductProgress),
        }
    }

    /// Set the notifier told about each conduct pass
    pub fn with_progress(mut self, progress: Box<dyn ConductProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Surveys created so far
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the menu until the user exits or input ends
    ///
    /// Invalid input never ends the session; only a failing output
    /// stream or a failing reader does.
    pub fn run(&mut self) -> Result<(), MenuError> {
        info!("Menu session started");
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(MenuError::Input(InputError::Closed)) => {
                    debug!("Input closed, leaving menu");
                    writeln!(self.out)?;
                    break;
                }
                Err(e) => {
                    warn!("Menu session aborted: {}", e);
                    return Err(e);
                }
            }
        }
        self.out.flush()?;
        info!("Menu session ended with {} surveys", self.catalog.len());
        Ok(())
    }

    fn step(&mut self) -> Result<Flow, MenuError> {
        self.print_menu()?;

        let Some(number) = self.read_number("Invalid input. Enter number between 1-6.")? else {
            return Ok(Flow::Continue);
        };
        let Some(item) = MenuItem::from_number(number) else {
            writeln!(self.out, "Invalid choice.")?;
            return Ok(Flow::Continue);
        };
        debug!("Menu item {:?}", item);

        match item {
            MenuItem::CreateSurvey => self.create_survey()?,
            MenuItem::AddQuestions => self.add_questions()?,
            MenuItem::ViewSurvey => self.view_survey()?,
            MenuItem::ConductSurvey => self.conduct_survey()?,
            MenuItem::PublishResults => self.publish_results()?,
            MenuItem::Exit => {
                writeln!(self.out, "Exiting...")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<(), MenuError> {
        writeln!(self.out, "\n{}", "=== SURVEY SOFTWARE ===".cyan().bold())?;
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, item.label())?;
        }
        self.prompt("Enter choice: ")
    }

    fn prompt(&mut self, text: &str) -> Result<(), MenuError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// A number, or `None` after printing `invalid` for non-numeric input
    fn read_number(&mut self, invalid: &str) -> Result<Option<i64>, MenuError> {
        match self.input.read_number() {
            Ok(number) => Ok(Some(number)),
            Err(InputError::NotANumber(word)) => {
                debug!("Rejected non-numeric input {:?}", word);
                writeln!(self.out, "{}", invalid)?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_survey(&mut self) -> Result<(), MenuError> {
        self.prompt("Enter Survey Title: ")?;
        let title = self.input.read_text()?;

        match CreateSurveyUseCase::new().execute(&mut self.catalog, &title) {
            Ok(output) => writeln!(
                self.out,
                "Survey \"{}\" created successfully!",
                output.title
            )?,
            Err(_) => writeln!(self.out, "Survey title cannot be empty.")?,
        }
        Ok(())
    }

    fn add_questions(&mut self) -> Result<(), MenuError> {
        let use_case = AddQuestionUseCase::new();
        let titles = listed_titles(use_case.candidates(&self.catalog));
        let Some(index) = self.choose_survey(titles, "Enter survey number: ")? else {
            return Ok(());
        };
        let title = match self
            .catalog
            .select_by_display_index(AddQuestionUseCase::FILTER, index)
        {
            Ok(survey) => survey.title().to_string(),
            Err(e) => return self.report_not_found(&e),
        };

        self.prompt("Enter number of questions to add: ")?;
        let Some(count) = self.read_number("Invalid input.")? else {
            return Ok(());
        };
        let Some(count) = usize::try_from(count).ok().filter(|n| *n > 0) else {
            writeln!(self.out, "Invalid input.")?;
            return Ok(());
        };

        for number in 1..=count {
            self.prompt(&format!("\nEnter text for Question {}: ", number))?;
            let text = self.input.read_text()?;
            if use_case.check_text(&text).is_err() {
                writeln!(self.out, "Question cannot be empty. Skipping.")?;
                continue;
            }

            self.prompt("Enter number of options (2-5): ")?;
            let Some(option_count) = self.read_number(INVALID_OPTION_COUNT)? else {
                continue;
            };
            let option_count = usize::try_from(option_count)
                .ok()
                .filter(|c| use_case.check_option_count(*c).is_ok());
            let Some(option_count) = option_count else {
                writeln!(self.out, "{}", INVALID_OPTION_COUNT)?;
                continue;
            };

            let mut options = Vec::with_capacity(option_count);
            for i in 1..=option_count {
                self.prompt(&format!("Option {}: ", i))?;
                options.push(self.input.read_text()?);
            }

            let draft = QuestionDraft::new(text, options);
            if let Err(e) = use_case.execute(&mut self.catalog, index, &draft) {
                writeln!(self.out, "{}", e)?;
            }
        }

        writeln!(
            self.out,
            "\nAll questions added successfully to survey: {}",
            title
        )?;
        Ok(())
    }

    fn view_survey(&mut self) -> Result<(), MenuError> {
        let use_case = ViewSurveyUseCase::new();
        let titles = listed_titles(use_case.candidates(&self.catalog));
        let Some(index) = self.choose_survey(titles, "Enter survey number: ")? else {
            return Ok(());
        };

        match use_case.execute(&self.catalog, index) {
            Ok(overview) => {
                write!(self.out, "{}", ConsoleFormatter::format_overview(&overview))?;
            }
            Err(ViewSurveyError::NotFound(e)) => return self.report_not_found(&e),
        }
        Ok(())
    }

    fn conduct_survey(&mut self) -> Result<(), MenuError> {
        let use_case = ConductSurveyUseCase::new();
        let titles = listed_titles(use_case.candidates(&self.catalog));
        let Some(index) = self.choose_survey(titles, "Select survey number: ")? else {
            return Ok(());
        };
        let survey = match self
            .catalog
            .select_by_display_index_mut(ConductSurveyUseCase::FILTER, index)
        {
            Ok(survey) => survey,
            Err(e) => return self.report_not_found(&e),
        };

        writeln!(self.out, "\nConducting survey: {}", survey.title())?;
        let mut responder = InteractiveResponder::new(&mut self.input, &mut self.out);
        let outcome = use_case.conduct(survey, &mut responder, &*self.progress);
        debug!(
            "Conduct pass answered {}/{}",
            outcome.answered, outcome.total_questions
        );

        writeln!(
            self.out,
            "\nResponses recorded successfully for: {}",
            survey.title()
        )?;
        Ok(())
    }

    fn publish_results(&mut self) -> Result<(), MenuError> {
        let use_case = PublishResultsUseCase::new();
        let titles = listed_titles(use_case.candidates(&self.catalog));
        let Some(index) = self.choose_survey(titles, "Select survey number: ")? else {
            return Ok(());
        };

        match use_case.execute(&self.catalog, index) {
            Ok(report) => {
                let text = self.formatter.render(&report, self.format);
                write!(self.out, "{}", text)?;
            }
            Err(PublishError::NotFound(e)) => {
                return self.report_not_found(&e);
            }
            Err(e) => writeln!(self.out, "{}.", e)?,
        }
        Ok(())
    }

    /// List the candidates and ask for a display index
    ///
    /// Returns `None` when there is nothing to choose from or the input
    /// is not a number; the reason has already been printed.
    fn choose_survey(
        &mut self,
        titles: Result<Vec<String>, NotFoundError>,
        prompt: &str,
    ) -> Result<Option<usize>, MenuError> {
        let titles = match titles {
            Ok(titles) => titles,
            Err(e) => {
                self.report_not_found(&e)?;
                return Ok(None);
            }
        };

        write!(
            self.out,
            "{}",
            ConsoleFormatter::format_listing(titles.iter().map(String::as_str))
        )?;
        self.prompt(prompt)?;

        let Some(number) = self.read_number("Invalid input.")? else {
            return Ok(None);
        };
        // Zero and negative numbers fall through to "Invalid selection."
        Ok(Some(usize::try_from(number).unwrap_or(0)))
    }

    fn report_not_found(&mut self, error: &NotFoundError) -> Result<(), MenuError> {
        if error.is_empty_listing() {
            writeln!(self.out, "{}.", error)?;
        } else {
            writeln!(self.out, "Invalid selection.")?;
        }
        Ok(())
    }
}

/// Titles of the listed surveys, detached from the catalog borrow
fn listed_titles(
    candidates: Result<Vec<DisplayEntry<'_>>, NotFoundError>,
) -> Result<Vec<String>, NotFoundError> {
    candidates.map(|entries| {
        entries
            .iter()
            .map(|entry| entry.survey.title().to_string())
            .collect()
    })
}
