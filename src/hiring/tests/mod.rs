mod candidates;
mod common;
mod interviews;
