use crate::domain::ports::Animal;
use crate::utils::error::{CageError, Result};
use std::io::Write;

/// 裝動物的籠子。`T` 必須同時是 `Animal` 並能和同類比較。
///
/// 內部保留插入順序；排序只發生在輸出時，不會改動儲存的順序。
#[derive(Debug, Clone)]
pub struct Cage<T>
where
    T: Animal + Ord,
{
    animals: Vec<T>,
}

impl<T> Cage<T>
where
    T: Animal + Ord,
{
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
        }
    }

    pub fn from_animals(animals: Vec<T>) -> Self {
        Self { animals }
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.animals.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.animals
    }

    /// 依排序後的順序取出名字（穩定排序，同 rank 保持插入順序）
    pub fn sorted_names(&self) -> Vec<String> {
        let mut sorted: Vec<&T> = self.animals.iter().collect();
        sorted.sort();
        tracing::debug!(count = sorted.len(), "sorted cage contents");
        sorted
            .into_iter()
            .map(|animal| animal.name().to_string())
            .collect()
    }

    /// `[a, b, c]` 格式
    pub fn render_sorted(&self) -> String {
        format!("[{}]", self.sorted_names().join(", "))
    }

    pub fn render_sorted_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.sorted_names())?)
    }

    pub fn write_sorted<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.render_sorted())?;
        Ok(())
    }

    pub fn print_sorted(&self) {
        println!("{}", self.render_sorted());
    }

    /// 最早放入的動物
    pub fn first(&self) -> Result<&T> {
        self.animals.first().ok_or(CageError::EmptyCage)
    }

    pub fn put(&mut self, animal: T) {
        tracing::debug!(name = animal.name(), "putting animal into cage");
        self.animals.push(animal);
    }
}

impl<T> Cage<T>
where
    T: Animal + Ord + Clone,
{
    /// 把另一個籠子的動物複製進來；來源籠子不變
    pub fn absorb(&mut self, other: &Cage<T>) {
        tracing::debug!(
            incoming = other.len(),
            existing = self.len(),
            "absorbing animals from another cage"
        );
        self.animals.extend(other.animals.iter().cloned());
    }

    /// 把本籠子的動物複製到另一個籠子；本籠子不變
    pub fn donate(&self, other: &mut Cage<T>) {
        tracing::debug!(
            outgoing = self.len(),
            existing = other.len(),
            "donating animals to another cage"
        );
        other.animals.extend(self.animals.iter().cloned());
    }
}

impl<T> Default for Cage<T>
where
    T: Animal + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Cage<T>
where
    T: Animal + Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_animals(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Cage<T>
where
    T: Animal + Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for animal in iter {
            self.put(animal);
        }
    }
}
