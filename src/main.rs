//! Demonstration of eventforge domain models and validation
//!
//! Walks through the speaker, venue, and event entities, including the
//! failure paths, and prints the results.

use chrono::{Duration, Utc};
use eventforge::{Config, Event, Result, Speaker, Venue};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    eventforge::logging::init_tracing(&config.log_level, &config.environment)?;

    println!("=== eventforge Domain Model Demo ===\n");

    demo_speakers();
    println!();

    demo_venues();
    println!();

    demo_events();
    println!();

    demo_complete_scenario()?;

    Ok(())
}

fn demo_speakers() {
    println!("Demo 1: Speakers");
    println!("----------------");

    // Valid speaker
    match Speaker::new(1, Some("Joao Silva"), Some("joao@email.com")) {
        Ok(speaker) => println!("created: {} <{}>", speaker.full_name(), speaker.email()),
        Err(e) => println!("error: {}", e),
    }

    // Negative id
    match Speaker::new(-1, Some("Maria Santos"), Some("maria@email.com")) {
        Ok(speaker) => println!("created: {}", speaker.full_name()),
        Err(e) => println!("rejected negative id: {}", e),
    }

    // Email without '@'
    match Speaker::new(2, Some("Pedro Costa"), Some("pedroemail.com")) {
        Ok(speaker) => println!("created: {}", speaker.full_name()),
        Err(e) => println!("rejected bad email: {}", e),
    }

    // Biography normalization
    let mut speaker = Speaker::new(3, Some("Ana Paula"), Some("ana@email.com"))
        .expect("demo speaker is valid");
    speaker.set_biography(Some("Ten years of backend experience"));
    println!("biography set: {:?}", speaker.biography());
    speaker.set_biography(Some("   "));
    println!("biography after blank input: {:?}", speaker.biography());

    // Null-coercing fields
    speaker.set_company(Some("Tech Corp"));
    speaker.set_company(None);
    println!("company after None: {:?} (never absent)", speaker.company());
}

fn demo_venues() {
    println!("Demo 2: Venues");
    println!("--------------");

    let mut venue = Venue::new(2, Some("Municipal Auditorium"), Some("Flower St, 50"), 200)
        .expect("demo venue is valid");
    venue.set_description(Some("Modern auditorium with professional sound"));
    println!("{}", venue);

    venue.set_parking_info(Some("Free parking, 150 spots"));
    println!("parking: {:?}", venue.parking_info());
    venue.set_parking_info(None);
    println!("parking after None: {:?} (never absent)", venue.parking_info());

    // The default venue is a fresh instance on every call
    let a = Venue::default();
    let b = Venue::default();
    println!("default venue: {}", a);
    println!("two defaults equal by id: {}", a == b);
}

fn demo_events() {
    println!("Demo 3: Events");
    println!("--------------");

    // Past date is rejected
    match Event::new(
        2,
        Some("Past Event"),
        Utc::now() - Duration::days(1),
        Duration::hours(2),
    ) {
        Ok(event) => println!("created: {}", event.title()),
        Err(e) => println!("rejected past date: {}", e),
    }

    // Duration below 30 minutes is rejected
    match Event::new(
        3,
        Some("Short Talk"),
        Utc::now() + Duration::days(7),
        Duration::minutes(29),
    ) {
        Ok(event) => println!("created: {}", event.title()),
        Err(e) => println!("rejected short duration: {}", e),
    }

    // Lazy venue materialization
    let event = Event::new(
        4,
        Some("Architecture Seminar"),
        Utc::now() + Duration::days(30),
        Duration::hours(6),
    )
    .expect("demo event is valid");
    println!("venue (lazily materialized): {}", event.venue().name());
    println!(
        "repeated reads return the cached instance: {}",
        std::ptr::eq(event.venue(), event.venue())
    );

    // Event code requires explicit input and is trimmed
    let mut event = Event::new(
        5,
        Some("Tech Summit 2026"),
        Utc::now() + Duration::days(90),
        Duration::hours(8),
    )
    .expect("demo event is valid");
    println!("event code initially: {:?}", event.event_code());
    event
        .set_event_code(Some("  TECHSUMMIT2026  "))
        .expect("event code is present");
    println!("event code after set: {:?} (trimmed)", event.event_code());
}

fn demo_complete_scenario() -> Result<()> {
    println!("Demo 4: Complete Scenario");
    println!("-------------------------");

    let mut speaker = Speaker::new(10, Some("Joao Silva"), Some("joao@email.com"))?;
    speaker.set_biography(Some("Ten years of distributed systems experience"));
    speaker.set_company(Some("Tech Corp"));
    speaker.set_linked_in_profile(Some("https://linkedin.com/in/joaosilva"));

    let mut venue = Venue::new(10, Some("Convention Center"), Some("Main Ave, 100"), 500)?;
    venue.set_description(Some("Modern center with full infrastructure"));
    venue.set_parking_info(Some("Free parking, 200 spots"));

    let mut event = Event::new(
        10,
        Some("Rust Conference 2026"),
        Utc::now() + Duration::days(120),
        Duration::hours(8),
    )?;
    event.set_event_code(Some("RUSTCONF2026"))?;
    event.set_description(Some("Annual conference on systems programming"));
    event.set_requirements(Some("Interest in Rust"));
    event.set_notes(Some("Coffee break and lunch included"));
    event.assign_main_speaker(Some(speaker))?;

    println!("{}", event);
    println!("{}", venue);
    if let Some(main_speaker) = event.main_speaker() {
        println!("{}", main_speaker);
    }

    tracing::info!(event_id = event.event_id(), "Demo scenario assembled");

    Ok(())
}
