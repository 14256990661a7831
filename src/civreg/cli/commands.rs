//! # Session Shell
//!
//! The interactive menu. This is the only part of civreg that reads stdin or
//! writes stdout; everything it does to the registry goes through
//! [`RegistryApi`].
//!
//! ## Structure
//!
//! - `run()`: parses flags, loads config, builds the API and starts a session
//! - `Session::run()`: the menu loop, ended by option 7 or end of input
//! - `handle_*()`: one per menu option, prompting and printing results
//!
//! Prompts that validate input (dates, category, license type, numbered
//! options) repeat until the answer is accepted; see [`super::prompt`].

use super::prompt::{Prompter, OPTION_PROMPT};
use super::render::{print_details, print_failure, print_messages, print_table};
use super::setup::{init_tracing, Cli};
use civreg::api::{CmdMessage, CmdResult, DriverEdit, ListOrder, PersonEdit, RegistryApi};
use civreg::config::RegistryConfig;
use civreg::error::{RegistryError, Result};
use civreg::model::{Citizen, Driver, LicenseDetails, Person};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const MAIN_MENU: [&str; 7] = [
    "Digite 1 para cadastrar uma novo registro no sistema.",
    "Digite 2 para buscar um registro no sistema.",
    "Digite 3 para buscar e editar um registro no sistema.",
    "Digite 4 para buscar e deletar um registro no sistema.",
    "Digite 5 para listar todos os registros do sistema.",
    "Digite 6 para listar todos os registros do sistema em ordem alfabética.",
    "Digite 7 para encerrar o programa.",
];

const LICENSE_QUESTION: [&str; 2] = [
    "Digite 1 caso o cidadão NÃO possua a Carteira Nacional de Habilitação.",
    "Digite 2 caso o cidadão possua a Carteira Nacional de Habilitação.",
];

const PERSON_FIELDS: [&str; 3] = [
    "Digite 1 caso queira editar o nome.",
    "Digite 2 caso queira editar o CPF.",
    "Digite 3 caso queira editar a data de nascimento.",
];

const DRIVER_FIELDS: [&str; 7] = [
    "Digite 1 caso queira editar o nome.",
    "Digite 2 caso queira editar o CPF.",
    "Digite 3 caso queira editar a data de nascimento.",
    "Digite 4 caso queira editar o número de registro.",
    "Digite 5 caso queira editar a categoria.",
    "Digite 6 caso queira editar a data de emissão.",
    "Digite 7 caso queira editar o tipo de carteira.",
];

const DELETE_CONFIRMATION: [&str; 2] = [
    "Digite 1 caso queira prosseguir com a operação.",
    "Digite 2 caso queira interromper a operação.",
];

const NATIONAL_ID_PROMPT: &str = "Digite o número do CPF do cidadão: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Register,
    Search,
    Edit,
    Delete,
    List,
    ListSorted,
    Quit,
}

impl MenuOption {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuOption::Register),
            "2" => Some(MenuOption::Search),
            "3" => Some(MenuOption::Edit),
            "4" => Some(MenuOption::Delete),
            "5" => Some(MenuOption::List),
            "6" => Some(MenuOption::ListSorted),
            "7" => Some(MenuOption::Quit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli);
    let seed = config.seed_demo_records && !cli.no_seed;
    let pause = config.pause_after_command && !cli.no_pause;
    tracing::debug!(seed, pause, "starting session");

    let api = if seed {
        RegistryApi::with_seed()?
    } else {
        RegistryApi::default()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    Session::new(api, prompter, pause).run()
}

fn load_config(cli: &Cli) -> RegistryConfig {
    let config_dir: Option<PathBuf> = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "civreg", "civreg").map(|dirs| dirs.config_dir().to_path_buf())
    });

    let Some(config_dir) = config_dir else {
        tracing::debug!("no config directory available, using defaults");
        return RegistryConfig::default();
    };

    RegistryConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %config_dir.display(), error = %e, "ignoring unreadable config");
        RegistryConfig::default()
    })
}

pub struct Session<R, W> {
    api: RegistryApi,
    prompter: Prompter<R, W>,
    pause: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(api: RegistryApi, prompter: Prompter<R, W>, pause: bool) -> Self {
        Self {
            api,
            prompter,
            pause,
        }
    }

    /// Runs the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.prompter.output(),
            "Seja bem-vindo ao sistema de cadastro do DETRAN."
        )?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(RegistryError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::debug!("input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.prompter.output(), "Programa encerrado com sucesso.")?;
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        let out = self.prompter.output();
        writeln!(out, "\nMENU PRINCIPAL")?;
        for line in MAIN_MENU {
            writeln!(out, "{}", line)?;
        }

        let choice = self.prompter.ask(OPTION_PROMPT)?;
        let option = MenuOption::parse(&choice);
        tracing::debug!(?option, "menu selection");

        match option {
            Some(MenuOption::Register) => self.handle_register()?,
            Some(MenuOption::Search) => self.handle_search()?,
            Some(MenuOption::Edit) => self.handle_edit()?,
            Some(MenuOption::Delete) => self.handle_delete()?,
            Some(MenuOption::List) => self.handle_list(ListOrder::Insertion)?,
            Some(MenuOption::ListSorted) => self.handle_list(ListOrder::Alphabetical)?,
            Some(MenuOption::Quit) => {
                writeln!(self.prompter.output(), "\nEncerrando programa...")?;
                return Ok(Flow::Quit);
            }
            None => writeln!(self.prompter.output(), "\nOpção inválida!")?,
        }

        if self.pause {
            writeln!(
                self.prompter.output(),
                "\nPressione a tecla \"Enter\" para voltar ao menu principal..."
            )?;
            self.prompter.read_line()?;
        }
        Ok(Flow::Continue)
    }

    fn handle_register(&mut self) -> Result<()> {
        let p = &mut self.prompter;
        writeln!(p.output(), "\nCadastro de um novo registro:")?;
        let name = p.ask("Digite o nome: ")?;
        let national_id = p.ask("Digite o CPF: ")?;
        let birth_date = p.ask_date("Data de nascimento. ")?;
        let person = Person::new(name, national_id, birth_date);

        let citizen: Citizen = if p.ask_choice(&LICENSE_QUESTION, 1..=2)? == 1 {
            person.into()
        } else {
            let number = p.ask("Digite o número do registro da CNH: ")?;
            let category = p.ask_category()?;
            let issue_date = p.ask_date("Data de emissão. ")?;
            let license_type = p.ask_license_type()?;
            let license = LicenseDetails {
                number,
                category,
                issue_date,
                license_type,
            };
            Driver::new(person, license).into()
        };

        let result = self.api.register(citizen);
        print_messages(self.prompter.output(), &result.messages)?;
        Ok(())
    }

    fn handle_search(&mut self) -> Result<()> {
        writeln!(self.prompter.output(), "\nBusca de registro no sistema:")?;
        let national_id = self.prompter.ask(NATIONAL_ID_PROMPT)?;

        let outcome = self.api.find(&national_id);
        if let Some(result) = self.report(outcome)? {
            print_details(self.prompter.output(), &result.listed)?;
        }
        Ok(())
    }

    fn handle_edit(&mut self) -> Result<()> {
        writeln!(
            self.prompter.output(),
            "\nBuscar e editar um registro do sistema:"
        )?;
        let national_id = self.prompter.ask(NATIONAL_ID_PROMPT)?;

        let prompter = &mut self.prompter;
        let outcome = self.api.edit(&national_id, |citizen| {
            writeln!(prompter.output(), "CPF encontrado!")?;
            match citizen {
                Citizen::Unlicensed(person) => ask_person_edit(prompter)?.apply(person),
                Citizen::Licensed(driver) => ask_driver_edit(prompter)?.apply(driver),
            }
            Ok(())
        });

        self.report(outcome)?;
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<()> {
        writeln!(
            self.prompter.output(),
            "\nBuscar e deletar um registro do sistema:"
        )?;
        let national_id = self.prompter.ask(NATIONAL_ID_PROMPT)?;

        if let Err(err) = self.api.find(&national_id) {
            return self.report(Err(err)).map(|_| ());
        }

        writeln!(
            self.prompter.output(),
            "CPF encontrado!\nO registro do cidadão de CPF {} será deletado permanentemente do sistema.",
            national_id
        )?;

        if self.prompter.ask_choice(&DELETE_CONFIRMATION, 1..=2)? == 1 {
            let outcome = self.api.delete(&national_id);
            self.report(outcome)?;
        } else {
            print_messages(
                self.prompter.output(),
                &[CmdMessage::warning("Operação interrompida.")],
            )?;
        }
        Ok(())
    }

    fn handle_list(&mut self, order: ListOrder) -> Result<()> {
        let title = match order {
            ListOrder::Insertion => "Listagem resumida de todos os registros no sistema:",
            ListOrder::Alphabetical => {
                "Listagem resumida de todos os registros no sistema em ordem alfabética:"
            }
        };
        let result = self.api.list(order);
        print_table(self.prompter.output(), title, &result.listed)?;
        Ok(())
    }

    /// Prints a command's messages, or the failure if it is one the user can
    /// recover from. Other errors propagate.
    fn report(&mut self, outcome: Result<CmdResult>) -> Result<Option<CmdResult>> {
        match outcome {
            Ok(result) => {
                print_messages(self.prompter.output(), &result.messages)?;
                Ok(Some(result))
            }
            Err(err) if err.is_recoverable() => {
                print_failure(self.prompter.output(), &err)?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

fn ask_person_value<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    field: u8,
) -> Result<PersonEdit> {
    Ok(match field {
        1 => PersonEdit::Name(prompter.ask("Editando o nome. Digite o novo nome: ")?),
        2 => PersonEdit::NationalId(prompter.ask("Editando o CPF. Digite o novo CPF: ")?),
        _ => PersonEdit::BirthDate(prompter.ask_date("Editando a data de nascimento. ")?),
    })
}

fn ask_person_edit<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<PersonEdit> {
    let field = prompter.ask_choice(&PERSON_FIELDS, 1..=3)?;
    ask_person_value(prompter, field)
}

fn ask_driver_edit<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<DriverEdit> {
    let field = prompter.ask_choice(&DRIVER_FIELDS, 1..=7)?;
    Ok(match field {
        1..=3 => ask_person_value(prompter, field)?.into(),
        4 => DriverEdit::LicenseNumber(
            prompter.ask("Editando o número de registro. Digite o novo número de registro: ")?,
        ),
        5 => {
            write!(prompter.output(), "Editando a categoria. ")?;
            DriverEdit::Category(prompter.ask_category()?)
        }
        6 => DriverEdit::IssueDate(prompter.ask_date("Editando a data de emissão. ")?),
        _ => {
            write!(prompter.output(), "Editando o tipo de carteira. ")?;
            DriverEdit::LicenseType(prompter.ask_license_type()?)
        }
    })
}
