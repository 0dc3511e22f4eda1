/// Parse spreadsheet CSV export text into rows of trimmed fields.
///
/// Blank lines are skipped. A `"` toggles quoted mode and is never part of the
/// field, so commas inside quotes stay in the field. Doubled quotes (`""`) are
/// not treated as an escaped quote: they just toggle twice.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}
