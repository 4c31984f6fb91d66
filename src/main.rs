use anyhow::Result;
use chrono::{Datelike, Utc};
use std::env;

use entity_catalog::{Book, Person, Record, Rectangle};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "export" {
        // Export mode: dump the book library as JSON
        run_export()?;
    } else {
        // Demo mode (default)
        run_demo()?;
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    println!("🗂️  Entity Catalog v{} - shared vs instance state", entity_catalog::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Record: the minimal shared/instance contrast
    println!("\n📋 Record");
    let record = Record::new(18);
    println!("Record instance query 'age': {}", record.age());
    println!("Record type query 'class_age': {}", Record::class_age());
    println!("Record utility 'sum_num(10, 20)': {}", Record::sum_num(10, 20));

    // 2. Book: construction registers into the shared library
    println!("\n📚 Book");
    let book1 = Book::new("1984", "George Orwell", Some(1949))?;
    let book2 = Book::new("Python Programming", "John Doe", Some(2021))?;
    println!("Book description: {}", book1.description());
    println!("Book description: {}", book2.description());
    println!("Total books in library: {}", Book::total_books());
    println!("Is '1984' a classic? {}", Book::is_classic(book1.year));
    println!("Is '{}' a classic? {}", book2.title, Book::is_classic(book2.year));

    // Construction with a blank title fails and registers nothing
    match Book::new("", "Nobody", None) {
        Ok(_) => println!("unexpected: blank title accepted"),
        Err(e) => println!("Rejected construction: {}", e),
    }
    println!("Total books after rejection: {}", Book::total_books());

    // 3. Rectangle: the shared unit and its type-level mutator
    println!("\n📐 Rectangle");
    let rect = Rectangle::new(5.0, 3.0)?;
    println!("Rectangle area: {} {}", rect.area(), Rectangle::unit());
    println!("Rectangle perimeter (utility): {}", Rectangle::perimeter(5.0, 3.0));

    Rectangle::change_unit("inches");
    println!("New unit for rectangles: {}", Rectangle::unit());
    // The instance constructed before the mutation sees the new unit too
    println!("Same rectangle, new unit: {} {}", rect.area(), Rectangle::unit());

    // 4. Person: greetings, shared default country, birth year
    println!("\n🧑 Person");
    let person1 = Person::new("Alice", 30)?;
    let person2 = Person::new("Bob", 25)?;
    println!("Person greeting: {}", person1.greet());
    println!("Person greeting: {}", person2.greet());
    println!("General info: {}", Person::general_info());

    let current_year = Utc::now().year();
    println!(
        "{}'s birth year: {}",
        person1.name,
        Person::calculate_birth_year(person1.age, current_year)
    );
    println!(
        "{}'s birth year: {}",
        person2.name,
        Person::calculate_birth_year(person2.age, current_year)
    );

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Demo complete: {} books registered", Book::total_books());

    Ok(())
}

fn run_export() -> Result<()> {
    // Seed the library so the export has something to show
    Book::new("1984", "George Orwell", Some(1949))?;
    Book::new("Python Programming", "John Doe", Some(2021))?;
    Book::new("OOP Basics", "Jane Smith", None)?;

    let json = serde_json::to_string_pretty(&Book::library())?;
    println!("{}", json);

    Ok(())
}
