use anyhow::Result;
use chrono::Local;
use derive_more::Display;
use inquire::{Select, Text};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use cadastro::form::{Feedback, Form, FormError};
use cadastro::models::{Field, Status};
use cadastro::outbox::Outbox;

const OUTBOX_FILE: &str = "fichas.json";

/// Escreve o resultado de cada campo no terminal, fazendo o papel
/// do realce visual ao lado de cada campo do formulário.
struct TerminalFeedback;

impl Feedback for TerminalFeedback {
    fn set_error(&mut self, field: Field, message: &str) {
        println!("[✗] {field}: {message}");
    }

    fn set_success(&mut self, field: Field) {
        println!("[✓] {field}");
    }
}

pub struct App {
    form: Form,
    outbox: Outbox,
}

impl App {
    pub fn new(outbox: Outbox) -> Self {
        App {
            form: Form::new(),
            outbox,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Bem-vindo ao formulário de cadastro.");
        loop {
            match self.menu() {
                Ok(true) => {}
                Ok(false) => break,
                Err(error) => eprintln!("Erro: {error}"),
            }
        }
        self.outbox.save()?;
        Ok(())
    }

    /// Um passo do menu principal. Devolve false quando o usuário
    /// quer sair.
    fn menu(&mut self) -> Result<bool> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Preencher um campo")]
            Fill,
            #[display("Revisar a ficha")]
            Review,
            #[display("Enviar")]
            Submit,
            #[display("Sair")]
            Exit,
        }

        let choice = Select::new("O que você quer fazer?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Fill => {
                let field = Select::new("Qual campo?", Field::iter().collect()).prompt()?;
                let raw = Text::new(&format!("{field}:"))
                    .with_initial_value(self.form.value(field))
                    .prompt()?;

                let shown = self.form.input(field, &raw);
                println!("{field}: {shown}");
            }

            Choice::Review => {
                for field in Field::iter() {
                    let marker = match self.form.status(field) {
                        Status::Untouched => ' ',
                        Status::Error => '✗',
                        Status::Success => '✓',
                    };
                    let message = self.form.message(field);
                    if message.is_empty() {
                        println!("[{marker}] {field}: {}", self.form.value(field));
                    } else {
                        println!("[{marker}] {field}: {} ({message})", self.form.value(field));
                    }
                }
            }

            Choice::Submit => {
                let today = Local::now().date_naive();
                let mut feedback = TerminalFeedback;

                match self.form.submit(today, &mut feedback) {
                    Ok(registration) => {
                        self.outbox.record(registration);
                        self.outbox.save()?;
                        println!("Formulário enviado com sucesso!");
                    }
                    Err(FormError::FieldsInvalid) => {
                        println!("[!] Corrija os campos indicados e envie novamente.");
                    }
                    Err(other) => return Err(other.into()),
                }
            }

            Choice::Exit => return Ok(false),
        }

        Ok(true)
    }
}

fn main() -> Result<()> {
    simple_logging::log_to_file("./cadastro.log", log::LevelFilter::Info)?;

    let outbox = Outbox::open(OUTBOX_FILE.into())?;
    App::new(outbox).start()
}
