pub mod conditionals;
pub mod discover;
pub mod error;
pub mod mutants;
pub mod nodes;
pub mod operators;
pub mod output;
pub mod parser;
pub mod splice;
pub mod state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    JavaScript,
    TypeScript,
    Tsx,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::JavaScript => "javascript",
            Dialect::TypeScript => "typescript",
            Dialect::Tsx => "tsx",
        }
    }

    pub fn from_name(name: &str) -> Option<Dialect> {
        match name {
            "javascript" | "js" => Some(Dialect::JavaScript),
            "typescript" | "ts" => Some(Dialect::TypeScript),
            "tsx" => Some(Dialect::Tsx),
            _ => None,
        }
    }
}

pub fn detect_dialect(path: &camino::Utf8Path) -> Option<Dialect> {
    match path.extension()? {
        "js" | "mjs" | "cjs" => Some(Dialect::JavaScript),
        "ts" | "mts" | "cts" => Some(Dialect::TypeScript),
        "tsx" | "jsx" => Some(Dialect::Tsx),
        _ => None,
    }
}
