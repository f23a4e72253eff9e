//! The secondary-language diagnostic toggle (`--lang <code>`). A small
//! bundled phrase table, not a full localization system: known English
//! diagnostic fragments get a translated line appended, everything else
//! is left as-is rather than failing.

const PHRASES_ID: &[(&str, &str)] = &[
    ("undefined name", "nama tidak dikenal"),
    ("is not imported from", "tidak diimpor dari"),
    ("Unused variables found", "Ditemukan variabel yang tidak terpakai"),
    ("Unused functions found", "Ditemukan fungsi yang tidak terpakai"),
    ("is not iterable", "tidak dapat diiterasi"),
    ("is not exported from module", "tidak diekspor dari modul"),
    ("Import cycle detected", "Terdeteksi siklus impor"),
    ("module not found", "modul tidak ditemukan"),
];

fn phrase_table(lang: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match lang {
        "id" => Some(PHRASES_ID),
        _ => None,
    }
}

/// Appends a translated line for the first recognized phrase found in
/// `message`, or returns `message` unchanged if nothing matched or the
/// language has no bundled table.
pub fn append_translation(message: &str, lang: &str) -> String {
    let Some(table) = phrase_table(lang) else {
        return message.to_string();
    };
    for (english, translated) in table {
        if message.contains(english) {
            return format!("{message}\n  [{lang}] {translated}");
        }
    }
    message.to_string()
}
