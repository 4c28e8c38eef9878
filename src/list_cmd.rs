//! List the algorithm catalog.

use crate::BenchResult;
use crate::core::{AlgorithmDescriptor, Category, catalog, descriptors};

/// Print every descriptor, or only those of `category`.
pub fn run(category: Option<Category>) -> BenchResult<()> {
    let entries: Vec<&'static AlgorithmDescriptor> = match category {
        Some(c) => descriptors(c),
        None => catalog().to_vec(),
    };
    print!("{}", render(&entries));
    Ok(())
}

pub fn render(entries: &[&AlgorithmDescriptor]) -> String {
    let mut out = format!(
        "{:<16} {:<22} {:<10} {:<34} {:<10}\n",
        "ID", "Algorithm", "Category", "Time", "Space"
    );
    for d in entries {
        out.push_str(&format!(
            "{:<16} {:<22} {:<10} {:<34} {:<10}\n",
            d.id, d.name, d.category, d.time_complexity, d.space_complexity
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_each_descriptor() {
        let rendered = render(&descriptors(Category::Searching));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("linear_search"));
        assert!(lines[2].contains("O(log n)"));
    }
}
