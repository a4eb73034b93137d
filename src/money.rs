use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValorErro {
    #[error("Valor inválido.")]
    Invalido,
    #[error("O valor deve ser maior que zero.")]
    NaoPositivo,
}

/// Converte a entrada do usuário em centavos. Vírgula é separador decimal e
/// pontos são separadores de milhar ("1.234,56"); sem vírgula, um ponto vale
/// como decimal ("10.50").
pub fn parse_centavos(texto: &str) -> Result<i64, ValorErro> {
    let texto = texto.trim();
    if texto.is_empty() {
        return Err(ValorErro::Invalido);
    }
    if texto.starts_with('-') {
        return Err(ValorErro::NaoPositivo);
    }

    let normalizado = if texto.contains(',') {
        texto.replace('.', "").replace(',', ".")
    } else {
        texto.to_string()
    };

    let (inteiro, fracao) = match normalizado.split_once('.') {
        Some((i, f)) => (i, f),
        None => (normalizado.as_str(), ""),
    };

    if fracao.len() > 2 || !fracao.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValorErro::Invalido);
    }
    if inteiro.is_empty() && fracao.is_empty() {
        return Err(ValorErro::Invalido);
    }

    let reais: i64 = if inteiro.is_empty() {
        0
    } else {
        inteiro.parse().map_err(|_| ValorErro::Invalido)?
    };

    let centavos_fracao: i64 = if fracao.is_empty() {
        0
    } else if fracao.len() == 1 {
        fracao.parse::<i64>().map_err(|_| ValorErro::Invalido)? * 10
    } else {
        fracao.parse().map_err(|_| ValorErro::Invalido)?
    };

    let total = reais
        .checked_mul(100)
        .and_then(|v| v.checked_add(centavos_fracao))
        .ok_or(ValorErro::Invalido)?;

    if total <= 0 {
        return Err(ValorErro::NaoPositivo);
    }
    Ok(total)
}

fn agrupar_milhares(valor: i64) -> String {
    let digitos = valor.to_string().chars().rev().collect::<Vec<char>>();
    let mut saida = Vec::new();
    for (i, ch) in digitos.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            saida.push('.');
        }
        saida.push(*ch);
    }
    saida.into_iter().rev().collect()
}

pub fn formatar_centavos(centavos: i64) -> String {
    let abs = centavos.abs();
    format!("{}{},{:02}", if centavos < 0 { "-" } else { "" }, agrupar_milhares(abs / 100), abs % 100)
}

pub fn formatar_moeda(centavos: i64, simbolo: &str) -> String {
    let sinal = if centavos < 0 { "-" } else { "" };
    let abs = centavos.abs();
    format!("{}{} {},{:02}", sinal, simbolo, agrupar_milhares(abs / 100), abs % 100)
}

/// "2024-03-05" vira "05/03/2024"; entradas fora do formato voltam intactas.
pub fn data_br(iso: &str) -> String {
    let partes: Vec<&str> = iso.split('-').collect();
    match partes.as_slice() {
        [ano, mes, dia] if ano.len() == 4 && mes.len() == 2 && dia.len() == 2 => {
            format!("{}/{}/{}", dia, mes, ano)
        }
        _ => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_notacao_brasileira() {
        assert_eq!(parse_centavos("1.234,56"), Ok(123_456));
        assert_eq!(parse_centavos("10,5"), Ok(1_050));
        assert_eq!(parse_centavos(",50"), Ok(50));
    }

    #[test]
    fn aceita_decimal_com_ponto_e_inteiros() {
        assert_eq!(parse_centavos("10.50"), Ok(1_050));
        assert_eq!(parse_centavos("250"), Ok(25_000));
        assert_eq!(parse_centavos(" 7 "), Ok(700));
    }

    #[test]
    fn rejeita_entrada_invalida() {
        assert_eq!(parse_centavos(""), Err(ValorErro::Invalido));
        assert_eq!(parse_centavos("abc"), Err(ValorErro::Invalido));
        assert_eq!(parse_centavos("10,999"), Err(ValorErro::Invalido));
    }

    #[test]
    fn rejeita_valores_nao_positivos() {
        assert_eq!(parse_centavos("0"), Err(ValorErro::NaoPositivo));
        assert_eq!(parse_centavos("0,00"), Err(ValorErro::NaoPositivo));
        assert_eq!(parse_centavos("-10,00"), Err(ValorErro::NaoPositivo));
    }

    #[test]
    fn formata_com_milhar_e_decimal() {
        assert_eq!(formatar_centavos(123_456), "1.234,56");
        assert_eq!(formatar_centavos(50), "0,50");
        assert_eq!(formatar_moeda(123_456, "R$"), "R$ 1.234,56");
        assert_eq!(formatar_moeda(-9_900, "R$"), "-R$ 99,00");
    }

    #[test]
    fn converte_data_iso_para_br() {
        assert_eq!(data_br("2024-03-05"), "05/03/2024");
        assert_eq!(data_br("sem data"), "sem data");
    }
}
