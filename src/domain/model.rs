use crate::domain::ports::Animal;
use crate::utils::error::{CageError, Result};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirdKind {
    Bird,
    Sparrow,
    Eagle,
}

/// 每種鳥的固定資料
#[derive(Debug, Clone, Copy)]
pub struct KindTraits {
    pub name: &'static str,
    pub korean_name: &'static str,
    pub rank: u32,
}

const BIRD: KindTraits = KindTraits {
    name: "Bird",
    korean_name: "새",
    rank: 100,
};

const SPARROW: KindTraits = KindTraits {
    name: "Sparrow",
    korean_name: "참새",
    rank: 100,
};

const EAGLE: KindTraits = KindTraits {
    name: "Eagle",
    korean_name: "독수리",
    rank: 500,
};

impl BirdKind {
    pub const ALL: [BirdKind; 3] = [BirdKind::Bird, BirdKind::Sparrow, BirdKind::Eagle];

    pub fn traits(self) -> &'static KindTraits {
        match self {
            BirdKind::Bird => &BIRD,
            BirdKind::Sparrow => &SPARROW,
            BirdKind::Eagle => &EAGLE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BirdKind::Bird => "bird",
            BirdKind::Sparrow => "sparrow",
            BirdKind::Eagle => "eagle",
        }
    }
}

impl FromStr for BirdKind {
    type Err = CageError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        BirdKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CageError::UnknownKind {
                value: s.to_string(),
            })
    }
}

/// 籠子裡的鳥。只依 `rank` 排序，建立後不可變
#[derive(Debug, Clone)]
pub struct Bird {
    kind: BirdKind,
    name: String,
    rank: u32,
}

impl Bird {
    pub fn of_kind(kind: BirdKind) -> Self {
        Self::with_name(kind, kind.traits().name)
    }

    /// 自訂顯示名稱；rank 仍由種類決定
    pub fn with_name(kind: BirdKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            rank: kind.traits().rank,
        }
    }

    pub fn sparrow() -> Self {
        Self::of_kind(BirdKind::Sparrow)
    }

    pub fn eagle() -> Self {
        Self::of_kind(BirdKind::Eagle)
    }

    pub fn kind(&self) -> BirdKind {
        self.kind
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn korean_name(&self) -> &'static str {
        self.kind.traits().korean_name
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::of_kind(BirdKind::Bird)
    }
}

impl Animal for Bird {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Bird {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Bird {}

impl PartialOrd for Bird {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bird {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_kind_values() {
        let sparrow = Bird::sparrow();
        assert_eq!(sparrow.name(), "Sparrow");
        assert_eq!(sparrow.rank(), 100);
        assert_eq!(sparrow.korean_name(), "참새");

        let eagle = Bird::eagle();
        assert_eq!(eagle.name(), "Eagle");
        assert_eq!(eagle.rank(), 500);
        assert_eq!(eagle.korean_name(), "독수리");

        let plain = Bird::default();
        assert_eq!(plain.kind(), BirdKind::Bird);
        assert_eq!(plain.rank(), 100);
    }

    #[test]
    fn test_compare_by_rank_only() {
        assert!(Bird::sparrow() < Bird::eagle());
        assert_eq!(Bird::eagle().cmp(&Bird::sparrow()), Ordering::Greater);
        // 同 rank 視為相等，即使名字不同
        assert_eq!(Bird::sparrow().cmp(&Bird::default()), Ordering::Equal);
        assert_eq!(Bird::with_name(BirdKind::Eagle, "Hawkeye"), Bird::eagle());
    }

    #[test]
    fn test_custom_name_keeps_kind_rank() {
        let jack = Bird::with_name(BirdKind::Sparrow, "Jack");
        assert_eq!(jack.name(), "Jack");
        assert_eq!(jack.rank(), 100);
        assert_eq!(jack.kind(), BirdKind::Sparrow);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("eagle".parse::<BirdKind>().unwrap(), BirdKind::Eagle);
        assert_eq!(" Sparrow ".parse::<BirdKind>().unwrap(), BirdKind::Sparrow);
        assert_eq!("BIRD".parse::<BirdKind>().unwrap(), BirdKind::Bird);

        match "penguin".parse::<BirdKind>() {
            Err(CageError::UnknownKind { value }) => assert_eq!(value, "penguin"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
