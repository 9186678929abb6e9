use label_cli::report::{CategorySummary, summarize_by_category, total};
use label_model::{Fiber, Part, Product};

fn product(id: &str, category: &str, fibers_per_part: &[usize]) -> Product {
    let parts = fibers_per_part
        .iter()
        .enumerate()
        .map(|(idx, &fibers)| Part {
            part_id: idx as u64 + 1,
            product_id: id.to_string(),
            name: "shell".to_string(),
            weight: None,
            weight_unit: None,
            fibers: (0..fibers)
                .map(|_| Fiber {
                    product_id: id.to_string(),
                    part_id: idx as u64 + 1,
                    name: "cotton".to_string(),
                    proportion: Some(100.0),
                    brand: String::new(),
                    original_fiber_name: "Cotton".to_string(),
                    origin_france: false,
                    solution_dyed: false,
                    recycled: false,
                })
                .collect(),
        })
        .collect();
    Product {
        product_id: id.to_string(),
        product_category: category.to_string(),
        product_sub_category: String::new(),
        original_care_label: String::new(),
        parts,
    }
}

#[test]
fn summaries_grouped_and_sorted_by_category() {
    let products = vec![
        product("1", "top", &[2, 1]),
        product("2", "bag", &[]),
        product("3", "top", &[1]),
    ];
    let summaries = summarize_by_category(&products);
    assert_eq!(
        summaries,
        vec![
            CategorySummary {
                category: "bag".to_string(),
                products: 1,
                parts: 0,
                fibers: 0,
                without_fibers: 1,
            },
            CategorySummary {
                category: "top".to_string(),
                products: 2,
                parts: 3,
                fibers: 4,
                without_fibers: 0,
            },
        ]
    );

    let totals = total(&summaries);
    assert_eq!(totals.products, 3);
    assert_eq!(totals.parts, 3);
    assert_eq!(totals.fibers, 4);
    assert_eq!(totals.without_fibers, 1);
    assert!(totals.category.is_empty());
}
