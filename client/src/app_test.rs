use super::*;

#[test]
fn replace_history_replaces_entry() {
    let options = replace_history();
    assert!(options.replace);
    assert_eq!(options.scroll, NavigateOptions::default().scroll);
}
