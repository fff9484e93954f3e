//! Static donation record corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of raw donation values encoded
//! as JSON documents, covering the shapes found in the data store over time.

/// Flat records written before the `methods` list existed.
pub const CORPUS_LEGACY: &[&str] = &[
    r#"{"account":"국민 123456-78-123456 수도원","page_url":"https://example.org/donate"}"#,
    r#"{"account_number":"654321-00-000000","bank":"대구은행","holder":"까르멜 수녀원"}"#,
    r#"{"accountNumber":"200-345-987654","account_description":"건축 기금","pageUrl":"https://example.org/f"}"#,
    r#"{"url":"https://example.org/support","linkLabel":"Support the abbey"}"#,
    r#"{"pageURL":"https://example.org/n","note":"Donations by phone only"}"#,
];

/// Records using the structured `methods` list only.
pub const CORPUS_STRUCTURED: &[&str] = &[
    r#"{"methods":[{"type":"bank_account","bank":"국민은행","holder":"서울 베네딕도회","number":"123456-78-901234"},{"type":"link","label":"공식 후원 페이지","url":"https://example.com/donate"}]}"#,
    r#"{"methods":["https://a.example",{"type":"custom","label":"Phone","value":"033-555-1212"}]}"#,
    r#"{"methods":[{"type":"bank_account","description":"Contact the bursar"}]}"#,
];

/// Records mixing both shapes, with overlapping keys.
pub const CORPUS_MIXED: &[&str] = &[
    r#"{"methods":[{"type":"link","url":"https://x"}],"page_url":"https://x"}"#,
    r#"{"methods":[{"type":"bank_account","number":"111-222"}],"account":"111-222","bank":"Kookmin"}"#,
    r#"{"methods":[{"type":"bank_account","bank":"Shinhan"}],"account":"999","page_url":"https://y","note":"n"}"#,
];

/// Values that must normalise to nothing.
pub const CORPUS_MALFORMED: &[&str] = &[
    "null",
    "42",
    "true",
    r#"["https://a.example"]"#,
    r#""{not json""#,
    r#""\"just a string\"""#,
    r#"{}"#,
    r#"{"methods":null}"#,
    r#"{"methods":[{"type":"bank_account"},{"type":"link","url":" "},{"type":"custom"},{"type":"wire"},3,null]}"#,
];

/// Parse a corpus line into a raw value.
pub fn raw(line: &str) -> serde_json::Value {
    serde_json::from_str(line).expect("corpus lines are valid JSON documents")
}
