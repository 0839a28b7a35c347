use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use textfit::{AutoFit, Edges, FitConfig, Rect, ResizeTracker, TextCell};

fn main() {
    // Set up file logging
    let log_file = File::create("autofit.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut cell = TextCell::new("card", "card-title").padding(Edges::all(4));
    cell.set_text("Quarterly revenue");

    let mut tracker = ResizeTracker::new();
    let mut fit =
        AutoFit::new("card", "card-title", FitConfig::default()).expect("valid config");

    fit.attach(&mut tracker);

    // Shrink the card a little every frame, as a drag-resize would
    for width in (60..=220).rev().step_by(20) {
        let rect = Rect::from_size(width, 36);
        cell.place(rect);
        tracker.report("card", rect);

        if let Some(size) = fit.after_layout(&mut cell) {
            println!("card {:>3}x36 -> title {size}px ({})", width, fit.size().get());
        }
    }

    fit.detach(&mut tracker);
}
