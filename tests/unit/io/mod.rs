mod parse;
mod progress;
