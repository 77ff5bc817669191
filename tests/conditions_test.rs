use stencil::conditions::{
    remove_all_if_statements, replace_by_if_statement, replace_if_statements,
};
use stencil::config::IfStatementItem;

fn item(option: &str, order: i64) -> IfStatementItem {
    IfStatementItem {
        option: option.to_string(),
        order,
    }
}

#[test]
fn test_replaces_matching_if_statement() {
    let input = "HOLLA #IF(Something, OPTION)";
    assert_eq!(replace_by_if_statement("OPTION", input), "HOLLA Something");
}

#[test]
fn test_does_not_replace_when_option_does_not_match() {
    let input = "HOLLA #IF(Something, OPTION)";
    assert_eq!(replace_by_if_statement("ANOTHER_OPTION", input), input);
}

#[test]
fn test_leaves_text_without_directives_unchanged() {
    let input = "This is a plain string.";
    assert_eq!(replace_by_if_statement("OPTION", input), input);
}

#[test]
fn test_replaces_statements_in_item_order() {
    let input = "Start #IF(FirstContent, FIRST) #IF(SecondContent, SECOND) End";
    let items = vec![item("SECOND", 2), item("FIRST", 1)];
    assert_eq!(
        replace_if_statements(&items, input),
        "Start FirstContent SecondContent End"
    );
}

#[test]
fn test_strips_unmatched_statements_and_collapses_whitespace() {
    let input = "Start #IF(FirstContent, FIRST) #IF(SecondContent, SECOND) End";
    let items = vec![item("FIRST", 1)];
    assert_eq!(replace_if_statements(&items, input), "Start FirstContent End");
}

#[test]
fn test_resolves_nested_statements_inner_first() {
    let input = "Nested #IF(#IF(InnerContent, INNER), OUTER) Content";
    let items = vec![item("INNER", 1), item("OUTER", 2)];
    assert_eq!(
        replace_if_statements(&items, input),
        "Nested InnerContent Content"
    );
}

#[test]
fn test_empty_item_list_strips_all_statements() {
    let input = "This is #IF(Content, OPTION).";
    assert_eq!(replace_if_statements(&[], input), "This is .");
}

#[test]
fn test_malformed_directives_are_left_untouched() {
    let input = "This #IF(MALFORMED string should remain unchanged.";
    let items = vec![item("MALFORMED", 1)];
    assert_eq!(replace_if_statements(&items, input), input);
    assert_eq!(remove_all_if_statements(input), input);
}

#[test]
fn test_strips_unmatched_statements_without_flanking_whitespace() {
    let input = "Before #IF(Content, OPTION) After #IF(Leftover, OTHER).";
    let items = vec![item("OPTION", 1)];
    assert_eq!(replace_if_statements(&items, input), "Before Content After .");
}

#[test]
fn test_replaces_multiline_statement_in_place() {
    let input = "Before\n    #IF(Content, OPTION)\n    After";
    let items = vec![item("OPTION", 1)];
    assert_eq!(
        replace_if_statements(&items, input),
        "Before\n    Content\n    After"
    );
}

#[test]
fn test_removal_drops_line_left_blank() {
    let input = "Before\n    #IF(Content, OPTION)\n    After";
    assert_eq!(remove_all_if_statements(input), "Before\n    After");
}

#[test]
fn test_removal_trims_whitespace_only_result() {
    let input = "   #IF(Content, OPTION)   ";
    assert_eq!(remove_all_if_statements(input), "");
}

#[test]
fn test_removes_multiple_statements() {
    let input = "Start #IF(Content1, OPTION1) Middle #IF(Content2, OPTION2) End.";
    assert_eq!(remove_all_if_statements(input), "Start Middle End.");
}

#[test]
fn test_resolution_is_idempotent() {
    let input = "Start #IF(FirstContent, FIRST) #IF(SecondContent, SECOND) End";
    let items = vec![item("FIRST", 1)];

    let once = replace_if_statements(&items, input);
    let twice = replace_if_statements(&items, &once);
    assert_eq!(once, twice);

    let stripped = remove_all_if_statements(input);
    assert_eq!(remove_all_if_statements(&stripped), stripped);
}

#[test]
fn test_items_sharing_an_order_all_apply() {
    let input = "#IF(First, A) #IF(Second, B)";
    let items = vec![item("A", 1), item("B", 1)];
    assert_eq!(replace_if_statements(&items, input), "First Second");
}
