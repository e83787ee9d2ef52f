mod concurrency;
mod content;
mod meta;
mod streams;
