use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 書籍ID - 書籍集約の識別子
///
/// ストアへの初回保存時に採番され、以後変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 書籍カテゴリ（閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Romance,
    Fiction,
    Fantasy,
    ScienceFiction,
    Mystery,
    Horror,
    Biography,
    History,
    Poetry,
    Technical,
}

impl Category {
    /// 永続化用の文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Romance => "ROMANCE",
            Category::Fiction => "FICTION",
            Category::Fantasy => "FANTASY",
            Category::ScienceFiction => "SCIENCE_FICTION",
            Category::Mystery => "MYSTERY",
            Category::Horror => "HORROR",
            Category::Biography => "BIOGRAPHY",
            Category::History => "HISTORY",
            Category::Poetry => "POETRY",
            Category::Technical => "TECHNICAL",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROMANCE" => Ok(Category::Romance),
            "FICTION" => Ok(Category::Fiction),
            "FANTASY" => Ok(Category::Fantasy),
            "SCIENCE_FICTION" => Ok(Category::ScienceFiction),
            "MYSTERY" => Ok(Category::Mystery),
            "HORROR" => Ok(Category::Horror),
            "BIOGRAPHY" => Ok(Category::Biography),
            "HISTORY" => Ok(Category::History),
            "POETRY" => Ok(Category::Poetry),
            "TECHNICAL" => Ok(Category::Technical),
            _ => Err(format!("Invalid book category: {}", s)),
        }
    }
}

/// 配布形態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Distribution {
    /// 紙の書籍
    Physical,
    /// 電子書籍
    Digital,
}

impl Distribution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Physical => "PHYSICAL",
            Distribution::Digital => "DIGITAL",
        }
    }
}

impl std::str::FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHYSICAL" => Ok(Distribution::Physical),
            "DIGITAL" => Ok(Distribution::Digital),
            _ => Err(format!("Invalid distribution: {}", s)),
        }
    }
}
