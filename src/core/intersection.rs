use std::collections::HashSet;
use std::hash::Hash;

/// 兩個序列的值集合是否有交集（忽略順序與重複）
pub fn has_intersection<T: Eq + Hash>(left: &[T], right: &[T]) -> bool {
    let left: HashSet<&T> = left.iter().collect();
    let right: HashSet<&T> = right.iter().collect();
    left.intersection(&right).next().is_some()
}
