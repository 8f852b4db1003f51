//! Persistência em JSON das fichas aceitas.
//!
//! Faz o papel do destino de envio do formulário: o transporte real
//! é um colaborador externo, aqui representado por um arquivo local.

use crate::models::Registration;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, ErrorKind::NotFound},
    path::PathBuf,
};

#[derive(Serialize, Deserialize)]
pub struct Outbox {
    #[serde(skip)]
    path: Option<PathBuf>,
    entries: Vec<Registration>,
}

impl Outbox {
    pub fn open(path: PathBuf) -> Result<Self, io::Error> {
        match File::open(&path) {
            Ok(file) => {
                let mut outbox: Self = serde_json::from_reader(file)?;
                outbox.path = Some(path);
                Ok(outbox)
            }

            // Arquivo inexistente, começamos com uma caixa vazia
            Err(not_found) if not_found.kind() == NotFound => {
                info!("Arquivo de fichas não encontrado, criando um novo");
                let outbox = Self {
                    path: Some(path),
                    entries: Vec::new(),
                };
                outbox.save()?;
                Ok(outbox)
            }

            Err(other) => Err(other),
        }
    }

    pub fn save(&self) -> Result<(), io::Error> {
        if let Some(path) = &self.path {
            let file = File::create(path)?;
            serde_json::to_writer_pretty(file, self)?;
        }
        Ok(())
    }

    pub fn record(&mut self, registration: Registration) {
        self.entries.push(registration);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Registration> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::input_validation::{Cep, Cpf};
    use chrono::NaiveDate;

    fn sample() -> Registration {
        Registration {
            name: "Ana".to_owned(),
            email: "a@b.com".to_owned(),
            phone: "(11) 98765-4321".to_owned(),
            cpf: Cpf::try_from("123.456.789-00").expect("valid CPF"),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
            street: "Rua X".to_owned(),
            cep: Cep::try_from("12345-678").expect("valid CEP"),
            city: "São Paulo".to_owned(),
            district: "Centro".to_owned(),
            uf: "SP".to_owned(),
        }
    }

    #[test]
    fn creates_a_fresh_file_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fichas.json");

        let outbox = Outbox::open(path.clone()).expect("open");

        assert!(outbox.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn saved_entries_survive_reopening() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fichas.json");

        let mut outbox = Outbox::open(path.clone()).expect("open");
        outbox.record(sample());
        outbox.save().expect("save");

        let reopened = Outbox::open(path).expect("reopen");
        assert_eq!(reopened.len(), 1);

        let entry = reopened.entries().next().expect("one entry");
        assert_eq!(entry.cpf.as_ref(), "123.456.789-00");
        assert_eq!(entry.city, "São Paulo");
    }
}
