use std::thread;
use std::time::Instant;

use anyhow::Context;
use life_driver::config::Config;
use life_driver::render;
use life_driver::session::Session;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::from_args(std::env::args().skip(1)).context("parse arguments")?;
    log::debug!("{:?}", config);

    let mut session = Session::new(&config);
    session.generate()?;
    session.start(Instant::now());

    while session.grid().generation() < config.generations {
        let now = Instant::now();
        if !session.tick(now)? {
            thread::sleep(session.until_next_step(now));
            continue;
        }

        let generation = session.grid().generation();
        if config.print_every > 0 && generation % config.print_every == 0 {
            let population = session.grid().population();
            println!("generation {generation}, {population} alive");
            print!("{}", render::frame(session.grid()));
        }
    }
    session.stop();

    println!(
        "finished at generation {}, {} alive",
        session.grid().generation(),
        session.grid().population()
    );
    print!("{}", render::frame(session.grid()));
    Ok(())
}
