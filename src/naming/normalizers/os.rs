/// Always returns a token; a sheet without a recognisable OS is `NOS`.
pub fn os_token(raw: &str) -> String {
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
    let token = if text.contains("WINDOWS 11 HOME") {
        "W11H"
    } else if text.contains("WINDOWS 11 PRO") {
        "W11P"
    } else if text.contains("WINDOWS") {
        "WIN"
    } else {
        "NOS"
    };
    token.to_string()
}
