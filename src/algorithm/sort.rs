//! 经典排序算法
//!
//! 所有算法都原地升序排序切片，提供 `T: Ord` 的简单版本和
//! 接受比较函数的 `*_by` 版本：
//! 1) 归并排序（稳定）
//! 2) 快速排序
//! 3) 堆排序
//! 4) 希尔排序
//! 5) 插入排序（稳定）
//! 6) 选择排序
//! 7) 冒泡排序（稳定）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 可选的排序算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortAlgorithm {
    #[default]
    Merge,
    Quick,
    Heap,
    Shell,
    Insertion,
    Selection,
    Bubble,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 7] = [
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Shell,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Bubble,
    ];

    /// 相等元素是否保持原有顺序
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Merge | SortAlgorithm::Insertion | SortAlgorithm::Bubble
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Bubble => "bubble",
        }
    }

    /// 用该算法排序
    pub fn sort_by<T, F>(self, a: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            SortAlgorithm::Merge => merge_sort_by(a, compare),
            SortAlgorithm::Quick => quick_sort_by(a, compare),
            SortAlgorithm::Heap => heap_sort_by(a, compare),
            SortAlgorithm::Shell => shell_sort_by(a, compare),
            SortAlgorithm::Insertion => insertion_sort_by(a, compare),
            SortAlgorithm::Selection => selection_sort_by(a, compare),
            SortAlgorithm::Bubble => bubble_sort_by(a, compare),
        }
    }

    pub fn sort<T: Ord + Clone>(self, a: &mut [T]) {
        self.sort_by(a, T::cmp)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("未知的排序算法: {}", s)))
    }
}

// ==================== 归并排序 ====================

/// O(n log n) 归并排序，稳定
pub fn merge_sort<T: Ord + Clone>(a: &mut [T]) {
    merge_sort_by(a, T::cmp)
}

pub fn merge_sort_by<T, F>(a: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_range(a, &mut compare);
}

fn merge_sort_range<T, F>(a: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if a.len() <= 1 {
        return;
    }
    let middle = a.len() / 2;
    merge_sort_range(&mut a[..middle], compare);
    merge_sort_range(&mut a[middle..], compare);
    merge(a, middle, compare);
}

/// 合并 `a[..middle]` 与 `a[middle..]` 两个已排序的子序列
fn merge<T, F>(a: &mut [T], middle: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let lower = a[..middle].to_vec();
    let upper = a[middle..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in a.iter_mut() {
        // 相等时取左侧元素，保证稳定
        let take_lower = j >= upper.len()
            || (i < lower.len() && compare(&lower[i], &upper[j]) != Ordering::Greater);
        if take_lower {
            *slot = lower[i].clone();
            i += 1;
        } else {
            *slot = upper[j].clone();
            j += 1;
        }
    }
}

// ==================== 快速排序 ====================

/// 期望 O(n log n) 快速排序
///
/// 以中间元素为枢轴做三路划分，等于枢轴的元素不再参与后续划分。
/// 只对较短的一侧递归，较长的一侧在循环中继续，递归深度为 O(log n)。
pub fn quick_sort<T: Ord>(a: &mut [T]) {
    quick_sort_by(a, T::cmp)
}

pub fn quick_sort_by<T, F>(a: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_range(a, &mut compare);
}

fn quick_sort_range<T, F>(mut a: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while a.len() > 1 {
        let (lt, gt) = partition3(a, compare);
        let slice = std::mem::take(&mut a);
        let (lower, rest) = slice.split_at_mut(lt);
        let upper = &mut rest[gt - lt..];
        if lower.len() < upper.len() {
            quick_sort_range(lower, compare);
            a = upper;
        } else {
            quick_sort_range(upper, compare);
            a = lower;
        }
    }
}

/// 三路划分，返回 `(lt, gt)`：
/// `a[..lt]` 小于枢轴，`a[lt..gt]` 等于枢轴，`a[gt..]` 大于枢轴
fn partition3<T, F>(a: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    a.swap(0, a.len() / 2);
    // 不变式：a[lt] 始终是枢轴值，a[lt..i] 全部等于枢轴
    let mut lt = 0;
    let mut i = 1;
    let mut gt = a.len();
    while i < gt {
        match compare(&a[i], &a[lt]) {
            Ordering::Less => {
                a.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                a.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

// ==================== 堆排序 ====================

/// O(n log n) 堆排序（大顶堆）
pub fn heap_sort<T: Ord>(a: &mut [T]) {
    heap_sort_by(a, T::cmp)
}

pub fn heap_sort_by<T, F>(a: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = a.len();
    if len <= 1 {
        return;
    }
    for parent in (0..len / 2).rev() {
        sift_down(a, parent, len, &mut compare);
    }
    for end in (1..len).rev() {
        a.swap(0, end);
        sift_down(a, 0, end, &mut compare);
    }
}

/// 将 `parent` 下沉到 `a[..end]` 中满足堆性质的位置
fn sift_down<T, F>(a: &mut [T], mut parent: usize, end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * parent + 1;
        if left >= end {
            break;
        }
        let right = left + 1;
        let mut largest = left;
        if right < end && compare(&a[right], &a[left]) == Ordering::Greater {
            largest = right;
        }
        if compare(&a[largest], &a[parent]) != Ordering::Greater {
            break;
        }
        a.swap(parent, largest);
        parent = largest;
    }
}

// ==================== 希尔排序 ====================

/// 希尔排序，间隔每轮减半，最坏 O(n²)
pub fn shell_sort<T: Ord>(a: &mut [T]) {
    shell_sort_by(a, T::cmp)
}

pub fn shell_sort_by<T, F>(a: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut gap = a.len() / 2;
    while gap >= 1 {
        for end in gap..a.len() {
            let mut j = end;
            while j >= gap && compare(&a[j - gap], &a[j]) == Ordering::Greater {
                a.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

// ==================== O(n²) 排序 ====================

/// 插入排序，稳定
pub fn insertion_sort<T: Ord>(a: &mut [T]) {
    insertion_sort_by(a, T::cmp)
}

pub fn insertion_sort_by<T, F>(a: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && compare(&a[j - 1], &a[j]) == Ordering::Greater {
            a.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// 选择排序
pub fn selection_sort<T: Ord>(a: &mut [T]) {
    selection_sort_by(a, T::cmp)
}

pub fn selection_sort_by<T, F>(a: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..a.len() {
        let mut min = i;
        for j in (i + 1)..a.len() {
            if compare(&a[min], &a[j]) == Ordering::Greater {
                min = j;
            }
        }
        a.swap(i, min);
    }
}

/// 冒泡排序，稳定
pub fn bubble_sort<T: Ord>(a: &mut [T]) {
    bubble_sort_by(a, T::cmp)
}

pub fn bubble_sort_by<T, F>(a: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in (1..=a.len()).rev() {
        let mut swapped = false;
        for j in 1..i {
            if compare(&a[j - 1], &a[j]) == Ordering::Greater {
                a.swap(j, j - 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// 检查切片是否按 `compare` 升序
pub fn is_sorted_by<T, F>(a: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    a.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Vertex};
    use rand::Rng;

    fn random_list(size: usize) -> Vec<u32> {
        let mut rng = rand::thread_rng();
        (0..size).map(|_| rng.gen_range(0..size.max(1) as u32)).collect()
    }

    #[test]
    fn test_all_algorithms_sort_random_input() {
        for algo in SortAlgorithm::ALL {
            for size in [0, 1, 2, 3, 257] {
                let mut list = random_list(size);
                let mut expected = list.clone();
                expected.sort();

                algo.sort(&mut list);
                assert_eq!(list, expected, "{} 排序失败, size={}", algo, size);
            }
        }
    }

    #[test]
    fn test_all_algorithms_handle_sorted_and_reversed() {
        for algo in SortAlgorithm::ALL {
            let mut ascending: Vec<i32> = (0..50).collect();
            algo.sort(&mut ascending);
            assert!(is_sorted_by(&ascending, i32::cmp), "{}", algo);

            let mut descending: Vec<i32> = (0..50).rev().collect();
            algo.sort(&mut descending);
            assert_eq!(descending, (0..50).collect::<Vec<_>>(), "{}", algo);
        }
    }

    #[test]
    fn test_quick_sort_large_equal_input() {
        let mut list = vec![7u32; 100_000];
        SortAlgorithm::Quick.sort(&mut list);
        assert!(list.iter().all(|&x| x == 7));

        let mut edges: Vec<Edge> = (0..100_000u64)
            .map(|i| Edge::undirected(Vertex::new(i), Vertex::new(i + 1)).with_weight(1.0))
            .collect();
        SortAlgorithm::Quick.sort_by(&mut edges, Edge::compare_weight);
        assert_eq!(edges.len(), 100_000);
        assert!(is_sorted_by(&edges, Edge::compare_weight));
    }

    #[test]
    fn test_quick_sort_large_sorted_input() {
        let mut ascending: Vec<u32> = (0..100_000).collect();
        quick_sort(&mut ascending);
        assert!(is_sorted_by(&ascending, u32::cmp));

        let mut descending: Vec<u32> = (0..100_000).rev().collect();
        quick_sort(&mut descending);
        assert_eq!(descending, (0..100_000).collect::<Vec<_>>());
    }

    #[test]
    fn test_stable_algorithms_keep_tie_order() {
        // (键, 原始位置)
        let input: Vec<(u8, usize)> = [3, 1, 2, 1, 3, 2, 1]
            .into_iter()
            .enumerate()
            .map(|(pos, key)| (key, pos))
            .collect();

        for algo in SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()) {
            let mut list = input.clone();
            algo.sort_by(&mut list, |a, b| a.0.cmp(&b.0));
            assert_eq!(
                list,
                vec![(1, 1), (1, 3), (1, 6), (2, 2), (2, 5), (3, 0), (3, 4)],
                "{} 不稳定",
                algo
            );
        }
    }

    #[test]
    fn test_sort_by_float_comparator() {
        let mut weights = vec![7.213, 2.3, 3.677, 0.5];
        merge_sort_by(&mut weights, |a: &f64, b: &f64| {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        });
        assert_eq!(weights, vec![0.5, 2.3, 3.677, 7.213]);
    }

    #[test]
    fn test_free_functions() {
        let source = vec![5, 3, 9, 1, 1, 8];
        let sorted = vec![1, 1, 3, 5, 8, 9];

        let mut a = source.clone();
        merge_sort(&mut a);
        assert_eq!(a, sorted);

        let mut a = source.clone();
        quick_sort(&mut a);
        assert_eq!(a, sorted);

        let mut a = source.clone();
        heap_sort(&mut a);
        assert_eq!(a, sorted);

        let mut a = source.clone();
        shell_sort(&mut a);
        assert_eq!(a, sorted);

        let mut a = source.clone();
        insertion_sort(&mut a);
        assert_eq!(a, sorted);

        let mut a = source.clone();
        selection_sort(&mut a);
        assert_eq!(a, sorted);

        let mut a = source;
        bubble_sort(&mut a);
        assert_eq!(a, sorted);
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("merge".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Merge);
        assert_eq!("Heap".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Heap);
        assert!(matches!(
            "bogo".parse::<SortAlgorithm>(),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(SortAlgorithm::default(), SortAlgorithm::Merge);
    }

    #[test]
    fn test_is_sorted_by() {
        assert!(is_sorted_by::<i32, _>(&[], i32::cmp));
        assert!(is_sorted_by(&[1, 2, 2, 3], i32::cmp));
        assert!(!is_sorted_by(&[2, 1], i32::cmp));
    }
}
