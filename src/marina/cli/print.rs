use colored::Colorize;
use marina::commands::{CmdMessage, MessageLevel, ProductView};
use marina::criteria::FilterCriteria;
use marina::model::{BoatType, DurationType, Location};
use marina::sync::format_date;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const TYPE_WIDTH: usize = 13;
const LOCATION_WIDTH: usize = 12;
const ANY: &str = "any";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_criteria(criteria: &FilterCriteria) {
    let location = criteria
        .selected_location
        .as_ref()
        .map(|l| l.name.clone())
        .unwrap_or_else(|| ANY.to_string());
    let date = criteria
        .departure_date
        .map(format_date)
        .unwrap_or_else(|| ANY.to_string());
    let boat_type = criteria
        .boat_type
        .as_ref()
        .map(|t| t.name.clone())
        .unwrap_or_else(|| ANY.to_string());

    let mut line = format!(
        "{} {}  {} {}  {} {}  {} {}",
        "location:".dimmed(),
        location,
        "date:".dimmed(),
        date,
        "type:".dimmed(),
        boat_type,
        "people:".dimmed(),
        criteria.number_of_people
    );
    if !criteria.search_term.is_empty() {
        line.push_str(&format!("  {} \"{}\"", "term:".dimmed(), criteria.search_term));
    }
    println!("{}\n", line);
}

pub(super) fn print_products(products: &[ProductView]) {
    if products.is_empty() {
        return;
    }

    for view in products {
        let p = &view.product;
        let idx = format!("{:>4}. ", p.id);
        let name = pad_to_width(&truncate_to_width(&p.name, NAME_WIDTH), NAME_WIDTH);
        let boat_type = pad_to_width(view.boat_type.as_deref().unwrap_or("-"), TYPE_WIDTH);
        let location = pad_to_width(view.location.as_deref().unwrap_or("-"), LOCATION_WIDTH);

        println!(
            "{}{} {} {} {:>3} {}  {}",
            idx.yellow(),
            name.bold(),
            boat_type,
            location.cyan(),
            p.travel_capacity,
            "guests".dimmed(),
            format_price(p.price, p.duration_type).green()
        );
    }
}

pub(super) fn print_product_detail(view: &ProductView) {
    let p = &view.product;
    println!("{} {}", format!("{}.", p.id).yellow(), p.display_title().bold());
    println!("--------------------------------");
    println!("{:<10}{}", "Name", p.name);
    println!("{:<10}{}", "Type", view.boat_type.as_deref().unwrap_or("-"));
    println!("{:<10}{}", "Location", view.location.as_deref().unwrap_or("-"));
    println!("{:<10}{}", "Guests", p.travel_capacity);
    println!("{:<10}{}", "Price", format_price(p.price, p.duration_type));
    if !p.images.is_empty() {
        println!("{:<10}{}", "Images", p.images.len());
    }
    if let Some(description) = p.description.as_deref().filter(|d| !d.trim().is_empty()) {
        println!();
        println!("{}", description);
    }
}

pub(super) fn print_locations(locations: &[Location]) {
    for location in locations {
        println!(
            "{} {}  {}",
            format!("{:>4}.", location.id).yellow(),
            pad_to_width(&location.name, LOCATION_WIDTH),
            location.title.dimmed()
        );
    }
}

pub(super) fn print_boat_types(boat_types: &[BoatType]) {
    for boat_type in boat_types {
        println!("{} {}", format!("{:>4}.", boat_type.id).yellow(), boat_type.name);
    }
}

pub(super) fn print_link(link: &str) {
    println!("\n{} {}", "link:".dimmed(), link.underline());
}

fn format_price(price: f64, duration: DurationType) -> String {
    if price.fract() == 0.0 {
        format!("{:.0} / {}", price, duration)
    } else {
        format!("{:.2} / {}", price, duration)
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
