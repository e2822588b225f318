use std::fs;
use std::path::Path;

use anyhow::Context;

pub const NOT_FOUND: &str =
    "No encontré información específica sobre esa pregunta en nuestra base de datos.";
pub const EMPTY_KNOWLEDGE: &str = "No hay texto para analizar.";

const DJ_MARKER: &str = "NOMBRE:";
const SECTION_HEADERS: &[&str] = &["CHATBOT", "ARTISTAS:", "INGRESOS", "PRESS"];
const MIN_SENTENCE_CHARS: usize = 10;
const MIN_WORD_CHARS: usize = 2;
const MAX_SENTENCES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    roster: String,
    instructions: Option<String>,
}

impl KnowledgeBase {
    pub fn new(roster: impl Into<String>) -> Self {
        Self {
            roster: roster.into(),
            instructions: None,
        }
    }

    pub fn roster_text(&self) -> &str {
        &self.roster
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    // `*prompt*` files hold assistant instructions, `*data*` files the roster.
    pub fn load_dir(dir: &Path) -> anyhow::Result<Self> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .with_context(|| format!("failed to read knowledge directory: {}", dir.display()))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();
        entries.sort();

        let mut roster_parts = Vec::new();
        let mut instruction_parts = Vec::new();

        for path in entries {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();

            let Some(text) = read_document(&path)? else {
                continue;
            };

            if name.contains("prompt") {
                tracing::info!(file = %name, "loaded assistant instructions");
                instruction_parts.push(text);
            } else if name.contains("data") {
                tracing::info!(file = %name, "loaded DJ roster");
                roster_parts.push(text);
            } else {
                tracing::debug!(file = %name, "ignoring knowledge file");
            }
        }

        if roster_parts.is_empty() {
            tracing::warn!(dir = %dir.display(), "no DJ roster document found");
        }

        Ok(Self {
            roster: roster_parts.join("\n"),
            instructions: (!instruction_parts.is_empty()).then(|| instruction_parts.join("\n")),
        })
    }
}

fn read_document(path: &Path) -> anyhow::Result<Option<String>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let text = match ext.as_str() {
        "txt" | "md" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        "pdf" => match read_pdf(path)? {
            Some(text) => text,
            None => return Ok(None),
        },
        _ => return Ok(None),
    };

    if text.trim().is_empty() {
        tracing::warn!(file = %path.display(), "document has no extractable text");
        return Ok(None);
    }
    Ok(Some(text))
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path) -> anyhow::Result<Option<String>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| anyhow::anyhow!("failed to extract text from {}: {e:?}", path.display()))?;
    Ok(Some(text))
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(path: &Path) -> anyhow::Result<Option<String>> {
    tracing::warn!(file = %path.display(), "PDF support not enabled, skipping");
    Ok(None)
}

pub fn format_roster(database: &str) -> String {
    let mut result = String::new();
    let mut block = String::new();

    for line in database.split('\n').map(str::trim) {
        if line.starts_with(DJ_MARKER) {
            if !block.is_empty() {
                result.push_str(&block);
                result.push('\n');
                result.push_str(&"-".repeat(50));
                result.push_str("\n\n");
            }
            block = format!("{line}\n");
        } else if !line.is_empty() && !SECTION_HEADERS.iter().any(|h| line.starts_with(h)) {
            block.push_str(line);
            block.push('\n');
        }
    }

    result.push_str(&block);
    result
}

pub fn lookup(database: &str, query: &str) -> String {
    if database.trim().is_empty() {
        return EMPTY_KNOWLEDGE.to_string();
    }

    let query = query.to_lowercase();
    let words: Vec<&str> = query
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_WORD_CHARS)
        .collect();

    let flattened = database.replace('\n', " ");
    let mut scored: Vec<(&str, usize)> = flattened
        .split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .filter_map(|sentence| {
            let lower = sentence.to_lowercase();
            let score = words.iter().filter(|w| lower.contains(**w)).count();
            (score > 0).then_some((sentence, score))
        })
        .collect();

    if scored.is_empty() {
        return NOT_FOUND.to_string();
    }

    // Stable, so equal scores keep document order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let best: Vec<&str> = scored
        .into_iter()
        .take(MAX_SENTENCES)
        .map(|(s, _)| s)
        .collect();
    format!("{}.", best.join(". "))
}

pub fn dj_profile(database: &str, dj_name: &str) -> Option<String> {
    let marker = format!("{DJ_MARKER} {dj_name}");
    let mut lines = Vec::new();
    let mut capturing = false;

    for line in database.lines() {
        if line.contains(&marker) {
            capturing = true;
        } else if capturing && (line.starts_with(DJ_MARKER) || line.starts_with("___")) {
            break;
        }

        if capturing {
            lines.push(line.trim());
        }
    }

    (!lines.is_empty()).then(|| lines.join("\n"))
}
