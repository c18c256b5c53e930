//! Black-box test: run the scenario end to end and check the transcript.

#[test]
fn scenario_transcript_is_exact() {
    let mut out = Vec::new();
    showroom_demo::run(&mut out).expect("writing to a Vec cannot fail");
    let text = String::from_utf8(out).expect("transcript is valid UTF-8");

    let expected = "\
== Smartphones: inheritance & encapsulation ==
Apple iPhone 14 | 256GB | Battery: 80%
Calling 123-456-7890 from Apple iPhone 14...
Used for 30 min, battery 74%
Battery now 89%
Apple iPhone 14 | 256GB | Battery: 89%
Samsung Galaxy S22 | 128GB | Battery: 55%
Used for 8 min, battery 54%
Samsung Galaxy S22 | 128GB | Battery: 54%

== Vehicles: polymorphic dispatch ==
Driving on the road!
Flying in the sky!
Sailing on the water!
";
    assert_eq!(text, expected);
}

#[test]
fn scenario_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    showroom_demo::run(&mut first).unwrap();
    showroom_demo::run(&mut second).unwrap();
    assert_eq!(first, second);
}
