//! Validação dos valores digitados nos campos do cadastro.

use chrono::NaiveDate;
use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

static CPF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("Failed to compile CPF regex"));

static CEP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("Failed to compile CEP regex"));

// Telefone fixo (00) 0000-0000 ou celular (00) 00000-0000
static LANDLINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(\d{2}\) \d{4}-\d{4}$").expect("Failed to compile landline regex")
});

static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").expect("Failed to compile mobile phone regex")
});

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").expect("Failed to compile date regex")
});

/// Erro genérico para um valor que não passou na validação.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("entrada inválida")]
pub struct InvalidInput;

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_cpf(value: &str) -> bool {
    CPF_REGEX.is_match(value)
}

pub fn is_valid_cep(value: &str) -> bool {
    CEP_REGEX.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    LANDLINE_REGEX.is_match(value) || MOBILE_REGEX.is_match(value)
}

/// Interpreta uma data de nascimento no formato `DD/MM/AAAA`.
///
/// O trio (dia, mês, ano) precisa existir no calendário, e a data
/// precisa ser estritamente anterior a `today`: a pessoa não pode
/// ter nascido hoje nem no futuro. `today` é recebido como argumento
/// para que a regra seja verificável em teste.
pub fn parse_birth_date(value: &str, today: NaiveDate) -> Result<NaiveDate, InvalidInput> {
    let caps = DATE_REGEX.captures(value).ok_or(InvalidInput)?;

    let day: u32 = caps[1].parse().map_err(|_| InvalidInput)?;
    let month: u32 = caps[2].parse().map_err(|_| InvalidInput)?;
    let year: i32 = caps[3].parse().map_err(|_| InvalidInput)?;

    if !(1..=12).contains(&month) {
        return Err(InvalidInput);
    }

    // from_ymd_opt rejeita dia 31 em mês de 30, 29/02 fora de
    // ano bissexto, dia zero etc.
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidInput)?;

    if date >= today {
        return Err(InvalidInput);
    }

    Ok(date)
}

/// CPF com o formato `000.000.000-00` já verificado.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
pub struct Cpf(String);

impl TryFrom<String> for Cpf {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&str> for Cpf {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if is_valid_cpf(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// CEP com o formato `00000-000` já verificado.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
pub struct Cep(String);

impl TryFrom<String> for Cep {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&str> for Cep {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if is_valid_cep(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidInput)
        }
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
