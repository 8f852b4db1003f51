//! Catálogo dos campos do formulário e a ficha de cadastro.

use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use thiserror::Error;

use crate::utils::input_validation::{
    is_valid_cep, is_valid_cpf, is_valid_email, is_valid_phone, parse_birth_date, Cep, Cpf,
};
use crate::utils::masks;

/// Um campo do formulário, declarado na ordem em que é avaliado
/// no envio (de cima para baixo na página).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Field {
    #[display("Nome")]
    Name,
    #[display("E-mail")]
    Email,
    #[display("Telefone")]
    Phone,
    #[display("CPF")]
    Cpf,
    #[display("Data de Nascimento")]
    BirthDate,
    #[display("Rua")]
    Street,
    #[display("CEP")]
    Cep,
    #[display("Cidade")]
    City,
    #[display("Bairro")]
    District,
    #[display("UF")]
    Uf,
}

impl Field {
    /// Aplica a máscara de exibição do campo. Campos de texto livre
    /// não têm máscara e passam direto.
    pub fn mask(self, raw: &str) -> String {
        match self {
            Self::Phone => masks::phone(raw),
            Self::Cpf => masks::cpf(raw),
            Self::BirthDate => masks::date(raw),
            Self::Cep => masks::cep(raw),
            _ => raw.to_owned(),
        }
    }

    /// Verifica o valor do campo. Valor vazio tem precedência sobre
    /// formato errado.
    pub fn check(self, value: &str, today: NaiveDate) -> Result<(), Flaw> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Flaw::Missing);
        }

        let well_formed = match self {
            Self::Name | Self::Street | Self::City | Self::District => true,
            Self::Email => is_valid_email(value),
            Self::Phone => is_valid_phone(value),
            Self::Cpf => is_valid_cpf(value),
            Self::BirthDate => parse_birth_date(value, today).is_ok(),
            Self::Cep => is_valid_cep(value),
            Self::Uf => value.chars().count() == 2,
        };

        if well_formed {
            Ok(())
        } else {
            Err(Flaw::Malformed)
        }
    }

    /// Mensagem mostrada ao usuário para cada defeito do campo.
    pub fn message(self, flaw: Flaw) -> &'static str {
        match (self, flaw) {
            (Self::Name, _) => "Nome é obrigatório",
            (Self::Email, Flaw::Missing) => "E-mail é obrigatório",
            (Self::Email, Flaw::Malformed) => "Forneça um e-mail válido",
            (Self::Phone, Flaw::Missing) => "Telefone é obrigatório",
            (Self::Phone, Flaw::Malformed) => {
                "Forneça um telefone válido (Ex: (00) 0000-0000 ou (00) 00000-0000)"
            }
            (Self::Cpf, Flaw::Missing) => "CPF é obrigatório",
            (Self::Cpf, Flaw::Malformed) => "Forneça um CPF válido (Ex: 123.456.789-00)",
            (Self::BirthDate, Flaw::Missing) => "Data de Nascimento é obrigatória",
            (Self::BirthDate, Flaw::Malformed) => {
                "Data inválida. Use DD/MM/AAAA e a data deve ser no passado."
            }
            (Self::Street, _) => "Rua é obrigatória",
            (Self::Cep, Flaw::Missing) => "CEP é obrigatório",
            (Self::Cep, Flaw::Malformed) => "Forneça um CEP válido (Ex: 00000-000)",
            (Self::City, _) => "Cidade é obrigatória",
            (Self::District, _) => "Bairro é obrigatório",
            (Self::Uf, Flaw::Missing) => "UF é obrigatória",
            (Self::Uf, Flaw::Malformed) => "UF deve ter 2 letras",
        }
    }
}

/// Defeito de um campo: ausente, ou presente com formato inválido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Flaw {
    #[error("campo obrigatório")]
    Missing,

    #[error("formato inválido")]
    Malformed,
}

/// Estado visual de um campo. Todo campo começa intocado e, a cada
/// validação, passa a erro ou sucesso. Não volta a intocado.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Untouched,
    Error,
    Success,
}

/// Ficha de cadastro produzida por um envio que passou na
/// validação completa.
#[derive(Debug, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: Cpf,
    pub birth_date: NaiveDate,
    pub street: String,
    pub cep: Cep,
    pub city: String,
    pub district: String,
    pub uf: String,
}
