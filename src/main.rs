use std::env::args;
use std::io;
use std::process;

use dynamic_list::{DynamicList, SortMethod};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let method = match args().nth(1).map(|tag| tag.parse::<SortMethod>()) {
        Some(Ok(method)) => method,
        Some(Err(e)) => {
            error!("{}", e);
            process::exit(2);
        }
        None => SortMethod::MergeSort,
    };

    let mut list = DynamicList::from(vec![10.0, 11.0, 2.0, 3.3, 1.0, 2.0]);
    println!("{}", list);

    info!(%method, "sorting demo list");
    list.sort_with(method, None);
    println!("{}", list);

    list.clear();
}
