//! Motor do formulário: máscara na digitação, validação completa
//! no envio, e o ponto único por onde uma ficha é aceita.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::info;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::models::{Field, Registration, Status};
use crate::utils::input_validation::{parse_birth_date, Cep, Cpf, InvalidInput};

#[derive(Debug, Error)]
pub enum FormError {
    #[error("o formulário contém campos inválidos")]
    FieldsInvalid,

    #[error(transparent)]
    Input(#[from] InvalidInput),
}

/// Destino de apresentação do resultado de cada campo. O texto de
/// erro e o indicador visual andam juntos: sucesso limpa os dois.
pub trait Feedback {
    fn set_error(&mut self, field: Field, message: &str);
    fn set_success(&mut self, field: Field);
}

/// Descarta as atualizações de apresentação.
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn set_error(&mut self, _field: Field, _message: &str) {}
    fn set_success(&mut self, _field: Field) {}
}

/// Valor corrente e estado visual de um campo.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub status: Status,
    pub message: String,
}

/// O formulário com seus dez campos.
pub struct Form {
    fields: HashMap<Field, FieldState>,
}

impl Form {
    pub fn new() -> Self {
        Self {
            fields: Field::iter()
                .map(|field| (field, FieldState::default()))
                .collect(),
        }
    }

    /// Registra o valor digitado, já passado pela máscara do campo.
    /// Nenhuma validação acontece na digitação.
    pub fn input(&mut self, field: Field, raw: &str) -> &str {
        let state = self.fields.entry(field).or_default();
        state.value = field.mask(raw);
        &state.value
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields
            .get(&field)
            .map_or("", |state| state.value.as_str())
    }

    pub fn status(&self, field: Field) -> Status {
        self.fields
            .get(&field)
            .map_or(Status::Untouched, |state| state.status)
    }

    pub fn message(&self, field: Field) -> &str {
        self.fields
            .get(&field)
            .map_or("", |state| state.message.as_str())
    }

    /// Avalia todos os campos na ordem do formulário, sem parar no
    /// primeiro defeito, e devolve se o conjunto inteiro passou.
    /// Cada campo tem status, mensagem e apresentação atualizados
    /// de uma vez, então nenhum erro antigo sobrevive a uma
    /// revalidação que passou (nem o contrário).
    pub fn validate(&mut self, today: NaiveDate, feedback: &mut dyn Feedback) -> bool {
        let mut all_valid = true;

        for field in Field::iter() {
            let state = self.fields.entry(field).or_default();
            match field.check(&state.value, today) {
                Ok(()) => {
                    state.status = Status::Success;
                    state.message.clear();
                    feedback.set_success(field);
                }
                Err(flaw) => {
                    let message = field.message(flaw);
                    state.status = Status::Error;
                    state.message = message.to_owned();
                    feedback.set_error(field, message);
                    all_valid = false;
                }
            }
        }

        all_valid
    }

    /// Valida tudo e, se o formulário inteiro passou, produz a ficha
    /// de cadastro. Caso contrário o envio é bloqueado e os
    /// indicadores de erro ficam visíveis para correção; o usuário
    /// pode reenviar quantas vezes quiser.
    pub fn submit(
        &mut self,
        today: NaiveDate,
        feedback: &mut dyn Feedback,
    ) -> Result<Registration, FormError> {
        if !self.validate(today, feedback) {
            return Err(FormError::FieldsInvalid);
        }

        let trimmed = |field: Field| self.value(field).trim().to_owned();
        let registration = Registration {
            name: trimmed(Field::Name),
            email: trimmed(Field::Email),
            phone: trimmed(Field::Phone),
            cpf: Cpf::try_from(trimmed(Field::Cpf))?,
            birth_date: parse_birth_date(self.value(Field::BirthDate).trim(), today)?,
            street: trimmed(Field::Street),
            cep: Cep::try_from(trimmed(Field::Cep))?,
            city: trimmed(Field::City),
            district: trimmed(Field::District),
            uf: trimmed(Field::Uf),
        };

        info!("Ficha de {} aceita", registration.name);
        Ok(registration)
    }
}
