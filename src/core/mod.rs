pub mod display;
pub mod keypad;
pub mod processor;
pub mod ram;
pub mod registers;
pub mod timers;
