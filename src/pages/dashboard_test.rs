use super::*;

#[test]
fn report_charts_markup_embeds_both_charts() {
    let markup = report_charts_markup();
    assert_eq!(markup.matches("<svg").count(), 2);
    assert!(markup.contains("Monthly sales"));
    assert!(markup.contains("Customer distribution"));
}
