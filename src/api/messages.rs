use crate::application::book::{BookApplicationError, Operation};
use crate::domain::ValidationError;

/// エラーレスポンス本文の言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::Pt),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

fn validation_message(locale: Locale, err: ValidationError) -> &'static str {
    match (locale, err) {
        (Locale::En, ValidationError::AuthorTooShort) => "author must have at least 3 characters",
        (Locale::En, ValidationError::TitleTooShort) => "title must have at least 4 characters",
        (Locale::En, ValidationError::IsbnTooShort) => "isbn must have at least 10 characters",
        (Locale::Pt, ValidationError::AuthorTooShort) => {
            "Nome do autor não possui 3 ou mais caracteres."
        }
        (Locale::Pt, ValidationError::TitleTooShort) => "Titulo não possui 4 ou mais caracteres.",
        (Locale::Pt, ValidationError::IsbnTooShort) => "Isbn não possui 10 ou mais caracteres.",
    }
}

fn not_found_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "id not found.",
        Locale::Pt => "ID não encontrado.",
    }
}

fn persistence_prefix(locale: Locale, operation: Operation) -> &'static str {
    match (locale, operation) {
        (Locale::En, Operation::Create) => "error creating",
        (Locale::En, Operation::List) => "error listing",
        (Locale::En, Operation::Update) => "error updating",
        (Locale::En, Operation::Delete) => "error deleting",
        (Locale::Pt, Operation::Create) => "Erro ao criar",
        (Locale::Pt, Operation::List) => "Erro ao listar",
        (Locale::Pt, Operation::Update) => "Erro ao atualizar",
        (Locale::Pt, Operation::Delete) => "Erro ao deletar",
    }
}

/// アプリケーション層のエラーを指定言語のメッセージに変換する
pub fn error_message(locale: Locale, err: &BookApplicationError) -> String {
    match err {
        BookApplicationError::Validation(e) => validation_message(locale, *e).to_string(),
        BookApplicationError::NotFound => not_found_message(locale).to_string(),
        BookApplicationError::Persistence { operation, source } => {
            format!("{}: {}", persistence_prefix(locale, *operation), source)
        }
    }
}
