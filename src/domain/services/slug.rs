/// Derives the public URL slug of a business from its display name.
///
/// Lower-cases, folds Latin diacritics to ASCII, drops everything outside
/// `[a-z0-9]`, whitespace and `-`, then joins words with single hyphens.
pub fn slugify(name: &str) -> String {
    let mut kept = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        let c = fold_diacritic(c);
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            kept.push(c);
        } else if c.is_whitespace() {
            kept.push(' ');
        }
    }

    kept.split(|c: char| c == ' ' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
