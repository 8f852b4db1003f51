//! Máscaras de digitação e validação de envio para um formulário
//! de cadastro com endereço brasileiro.

pub mod form;
pub mod models;
pub mod outbox;
pub mod utils;
