use label_core::{LabelProcessor, ProcessingOptions, build_frequency_map, run_two_pass};
use label_map::{FiberResolver, ResolverOptions};
use label_model::{MetadataVocabulary, ProductRecord, WeightUnit};

fn records() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new(
            "p1",
            "ACCESSORY/PHONE-CASES",
            "Shell: 80% Cotton, 20% Polyester 250gr Lining: 100% Polyester",
        ),
        ProductRecord::new("p2", "BAGS", "Outer: 60% Polyster, 40% Cordura® Nylon"),
    ]
}

fn options() -> ProcessingOptions {
    ProcessingOptions::new().with_resolver(
        ResolverOptions::default()
            .with_threshold(90)
            .with_min_occurrences(2),
    )
}

#[test]
fn frequency_pass_counts_tagged_names() {
    let frequencies = build_frequency_map(&records(), &MetadataVocabulary::default())
        .expect("default vocabulary");
    assert_eq!(frequencies.get("polyester"), 2);
    assert_eq!(frequencies.get("cotton"), 1);
    assert_eq!(frequencies.get("polyster"), 1);
    assert_eq!(frequencies.get("nylon"), 1);
    assert_eq!(frequencies.get("cordura nylon"), 0);
}

#[test]
fn two_pass_builds_products() {
    let output = run_two_pass(&records(), &options()).expect("pipeline");
    assert_eq!(output.products.len(), 2);

    let first = &output.products[0];
    assert_eq!(first.product_category, "accessory");
    assert_eq!(first.product_sub_category, "phone case");
    let part_ids: Vec<_> = first.parts.iter().map(|p| p.part_id).collect();
    assert_eq!(part_ids, vec![1, 2]);
    assert_eq!(first.parts[0].name, "shell");
    assert_eq!(first.parts[0].weight, Some(250.0));
    assert_eq!(first.parts[0].weight_unit, Some(WeightUnit::Grams));
    assert_eq!(first.parts[1].name, "lining");
    assert_eq!(first.parts[1].weight, None);

    let second = &output.products[1];
    assert_eq!(second.product_category, "bag");
    assert_eq!(second.product_sub_category, "");
    assert_eq!(second.parts[0].part_id, 3);
    assert_eq!(second.parts[0].name, "outer");

    let fibers = &second.parts[0].fibers;
    assert_eq!(fibers[0].name, "polyester");
    assert_eq!(fibers[0].original_fiber_name, "Polyster");
    assert_eq!(fibers[0].proportion, Some(60.0));
    assert_eq!(fibers[1].name, "nylon");
    assert_eq!(fibers[1].brand, "cordura");
    assert_eq!(fibers[1].original_fiber_name, "Cordura® Nylon");
    assert!(fibers.iter().all(|f| f.product_id == "p2" && f.part_id == 3));
}

#[test]
fn seeded_registry_absorbs_misspelling() {
    let output = run_two_pass(&records(), &options()).expect("pipeline");
    // Seeded with 2, then two pass-two uses plus the folded misspelling.
    assert_eq!(output.registry.count("polyester"), Some(5));
    assert!(!output.registry.contains("polyster"));
    assert_eq!(output.stats.matched, 3);
    assert_eq!(output.stats.inserted, 2);
}

#[test]
fn default_threshold_keeps_misspelling_apart() {
    let output = run_two_pass(&records(), &ProcessingOptions::default()).expect("pipeline");
    assert_eq!(output.products[1].parts[0].fibers[0].name, "polyster");
    assert_eq!(output.registry.len(), 4);
}

#[test]
fn part_ids_continue_across_calls() {
    let mut processor =
        LabelProcessor::new(&MetadataVocabulary::default(), FiberResolver::default())
            .expect("default vocabulary");
    let first = processor.process(&ProductRecord::new("a", "TOPS/SHIRTS", "100% Cotton"));
    let second = processor.process(&ProductRecord::new("b", "TOPS", ""));
    let third = processor.process(&ProductRecord::new("c", "TOPS", "Body: 100% Wool"));

    assert_eq!(first.parts[0].part_id, 1);
    assert_eq!(first.parts[0].name, "unknown");
    assert_eq!(first.product_sub_category, "shirt");
    assert!(second.parts.is_empty());
    assert_eq!(third.parts[0].part_id, 2);
    assert_eq!(processor.registry().len(), 2);
}
