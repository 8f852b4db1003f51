//! Máscaras de exibição dos campos formatados.
//!
//! Cada máscara descarta tudo que não é dígito e remonta o valor
//! exibido a partir das posições fixas do formato. Reaplicar uma
//! máscara sobre a própria saída não muda nada.

fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formata os dígitos de um CPF como `000.000.000-00`.
/// Dígitos além do décimo primeiro são descartados.
pub fn cpf(raw: &str) -> String {
    let mut d = digits(raw);
    d.truncate(11);

    let mut out = String::with_capacity(14);
    for (i, c) in d.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Formata um telefone como `(00) 0000-0000` (fixo) ou
/// `(00) 00000-0000` (celular), conforme a quantidade de dígitos
/// depois do DDD. A saída nunca passa de 15 caracteres.
pub fn phone(raw: &str) -> String {
    let mut d = digits(raw);
    if d.len() <= 2 {
        return d;
    }
    d.truncate(11);

    let (area, rest) = d.split_at(2);
    let split = if rest.len() <= 8 { 4 } else { 5 };
    if rest.len() <= split {
        format!("({area}) {rest}")
    } else {
        format!("({area}) {}-{}", &rest[..split], &rest[split..])
    }
}

/// Formata um CEP como `00000-000`.
pub fn cep(raw: &str) -> String {
    let mut d = digits(raw);
    d.truncate(8);

    if d.len() <= 5 {
        return d;
    }
    format!("{}-{}", &d[..5], &d[5..])
}

/// Formata uma data como `DD/MM/AAAA`.
pub fn date(raw: &str) -> String {
    let mut d = digits(raw);
    d.truncate(8);

    let mut out = String::with_capacity(10);
    for (i, c) in d.chars().enumerate() {
        if i == 2 || i == 4 {
            out.push('/');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_uses_only_the_first_eleven_digits() {
        let cases = vec![
            ("12345678900", "123.456.789-00"),
            ("123456789001234", "123.456.789-00"),
            ("111.222.333-44 extra 55", "111.222.333-44"),
        ];

        for (input, expected) in cases {
            assert_eq!(cpf(input), expected, "CPF mask failed for {input}");
        }
    }

    #[test]
    fn cpf_grows_with_partial_input() {
        let cases = vec![
            ("", ""),
            ("1", "1"),
            ("123", "123"),
            ("1234", "123.4"),
            ("123456", "123.456"),
            ("1234567", "123.456.7"),
            ("123456789", "123.456.789"),
            ("1234567890", "123.456.789-0"),
        ];

        for (input, expected) in cases {
            assert_eq!(cpf(input), expected, "CPF mask failed for {input}");
        }
    }

    #[test]
    fn phone_formats_landline_and_mobile() {
        assert_eq!(phone("1134567890"), "(11) 3456-7890");
        assert_eq!(phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn phone_grows_with_partial_input() {
        let cases = vec![
            ("", ""),
            ("1", "1"),
            ("11", "11"),
            ("119", "(11) 9"),
            ("119876", "(11) 9876"),
            ("1198765", "(11) 9876-5"),
        ];

        for (input, expected) in cases {
            assert_eq!(phone(input), expected, "phone mask failed for {input}");
        }
    }

    #[test]
    fn phone_never_exceeds_fifteen_characters() {
        let formatted = phone("119876543219999999");
        assert_eq!(formatted, "(11) 98765-4321");
        assert!(formatted.len() <= 15);
    }

    #[test]
    fn cep_inserts_the_dash_after_five_digits() {
        let cases = vec![
            ("", ""),
            ("1234", "1234"),
            ("12345", "12345"),
            ("123456", "12345-6"),
            ("12345678", "12345-678"),
            ("12345678999", "12345-678"),
        ];

        for (input, expected) in cases {
            assert_eq!(cep(input), expected, "CEP mask failed for {input}");
        }
    }

    #[test]
    fn date_inserts_slashes_at_fixed_positions() {
        let cases = vec![
            ("", ""),
            ("01", "01"),
            ("010", "01/0"),
            ("0101", "01/01"),
            ("01012", "01/01/2"),
            ("01012020", "01/01/2020"),
            ("010120209", "01/01/2020"),
        ];

        for (input, expected) in cases {
            assert_eq!(date(input), expected, "date mask failed for {input}");
        }
    }

    #[test]
    fn masks_are_idempotent() {
        let inputs = [
            "",
            "1",
            "12",
            "123",
            "12345",
            "12345678",
            "1234567890",
            "12345678900",
            "11987654321",
            "1134567890",
            "01012020",
        ];

        for input in inputs {
            let once = cpf(input);
            assert_eq!(cpf(&once), once, "CPF mask not idempotent for {input}");

            let once = phone(input);
            assert_eq!(phone(&once), once, "phone mask not idempotent for {input}");

            let once = cep(input);
            assert_eq!(cep(&once), once, "CEP mask not idempotent for {input}");

            let once = date(input);
            assert_eq!(date(&once), once, "date mask not idempotent for {input}");
        }
    }
}
