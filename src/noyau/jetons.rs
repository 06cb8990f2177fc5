// src/noyau/jetons.rs

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,
    E,

    // Fonctions reconnues (sin/cos/tan/log/ln/sqrt), toujours suivies de '('
    Ident(String),

    Plus,
    Minus,
    Star,  // × ou *
    Slash, // ÷ ou /
    Caret, // ^

    LPar,
    RPar,
}

/// Fonctions unaires acceptées par le tokenizer.
pub const FONCTIONS: [&str; 6] = ["sin", "cos", "tan", "log", "ln", "sqrt"];

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - × ÷ ^ (et * / en ASCII)
/// - parenthèses ( )
/// - constantes π et e
/// - fonctions sin( cos( tan( log( ln( sqrt( ; √ équivaut à sqrt
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '×' | '*' => Some(Tok::Star),
            '÷' | '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            'π' => Some(Tok::Pi),
            '√' => Some(Tok::Ident("sqrt".to_string())),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Mots : fonction connue ou constante e
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();

            if word == "e" {
                out.push(Tok::E);
                continue;
            }
            if FONCTIONS.contains(&word.as_str()) {
                // une fonction sans '(' ne veut rien dire ici ("sin5")
                let suivant = chars[i..].iter().find(|c| !c.is_whitespace());
                if suivant != Some(&'(') {
                    return Err(format!("'{word}' doit être suivi de '('"));
                }
                out.push(Tok::Ident(word));
                continue;
            }
            return Err(format!("identifiant inconnu: '{word}'"));
        }

        // Nombre décimal : au plus un '.'
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                }
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            if points > 1 || txt == "." {
                return Err(format!("nombre invalide: '{txt}'"));
            }
            let v = txt
                .parse::<f64>()
                .map_err(|_| format!("nombre invalide: '{txt}'"))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Pi => "π".to_string(),
            Tok::E => "e".to_string(),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
