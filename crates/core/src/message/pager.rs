//! Greedy character-budget pagination.

use tracing::debug;

use crate::message::Page;

/// Character budget a page may reach before it is closed.
pub const PAGE_BUDGET: usize = 2500;

/// Splits lines into pages of at most [`PAGE_BUDGET`] characters.
pub fn paginate<I>(lines: I) -> Vec<Page>
where
	I: IntoIterator<Item = String>,
{
	paginate_with_budget(lines, PAGE_BUDGET)
}

/// Splits lines into pages, closing a page once a line would overflow `budget`.
///
/// The overflowing line still lands on the page it overflowed, so no line is
/// ever split, dropped or reordered. A final page is always emitted, even
/// when it is empty.
pub fn paginate_with_budget<I>(lines: I, budget: usize) -> Vec<Page>
where
	I: IntoIterator<Item = String>,
{
	let mut paginator = Paginator::new(budget);
	for line in lines {
		paginator.push(line);
	}
	paginator.finish()
}

struct Paginator {
	budget: usize,
	count: usize,
	current: Vec<String>,
	pages: Vec<Page>,
}

impl Paginator {
	fn new(budget: usize) -> Self {
		Self {
			budget,
			count: 0,
			current: Vec::new(),
			pages: Vec::new(),
		}
	}

	fn push(&mut self, line: String) {
		debug!(target = "weekly", line = %line, "page line");
		let len = line.chars().count();
		self.current.push(line);

		if self.count + len > self.budget {
			self.pages.push(Page::new(std::mem::take(&mut self.current)));
			self.count = 0;
		} else {
			self.count += len;
		}
	}

	fn finish(mut self) -> Vec<Page> {
		self.pages.push(Page::new(self.current));
		self.pages
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn line(len: usize) -> String {
		"x".repeat(len)
	}

	#[test]
	fn small_input_is_one_page() {
		let pages = paginate(vec!["a".to_string(), "b".to_string()]);
		assert_eq!(pages, vec![Page::new(vec!["a".into(), "b".into()])]);
	}

	#[test]
	fn empty_input_still_yields_a_page() {
		let pages = paginate(Vec::new());
		assert_eq!(pages.len(), 1);
		assert!(pages[0].is_empty());
	}

	#[test]
	fn overflowing_line_closes_its_own_page() {
		let pages = paginate(vec![line(2490), line(50), line(10)]);
		assert_eq!(pages.len(), 2);
		assert_eq!(pages[0].char_count(), 2540);
		assert_eq!(pages[1].lines(), &[line(10)]);
	}

	#[test]
	fn exact_budget_stays_open() {
		let pages = paginate(vec![line(2000), line(500), line(1)]);
		assert_eq!(pages.len(), 2);
		assert_eq!(pages[0].lines().len(), 3);
		assert!(pages[1].is_empty());
	}

	#[test]
	fn oversized_single_line_is_never_split() {
		let pages = paginate(vec![line(6000)]);
		assert_eq!(pages.len(), 2);
		assert_eq!(pages[0].lines(), &[line(6000)]);
		assert!(pages[1].is_empty());
	}

	#[test]
	fn counts_characters_not_bytes() {
		let pages = paginate_with_budget(vec!["éé".to_string(), "é".to_string()], 3);
		assert_eq!(pages.len(), 1);
	}

	proptest! {
		#[test]
		fn pages_concatenate_to_input(lens in proptest::collection::vec(0usize..400, 0..60), budget in 1usize..1200) {
			let lines: Vec<String> = lens.iter().enumerate().map(|(i, len)| format!("{i}:{}", "y".repeat(*len))).collect();
			let pages = paginate_with_budget(lines.clone(), budget);
			let rejoined: Vec<String> = pages.into_iter().flat_map(Page::into_lines).collect();
			prop_assert_eq!(rejoined, lines);
		}

		#[test]
		fn only_the_last_line_of_a_page_may_overflow(lens in proptest::collection::vec(1usize..400, 1..60), budget in 1usize..1200) {
			let lines: Vec<String> = lens.iter().map(|len| "z".repeat(*len)).collect();
			for page in paginate_with_budget(lines, budget) {
				let Some((_, head)) = page.lines().split_last() else { continue };
				let head_len: usize = head.iter().map(|l| l.chars().count()).sum();
				prop_assert!(head_len <= budget);
			}
		}
	}
}
