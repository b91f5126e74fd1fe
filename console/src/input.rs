use xo_engine::game::Position;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    NewGame,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line {
        "q" | "quit" => return Ok(Command::Quit),
        "n" | "new" => return Ok(Command::NewGame),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("Expected \"x y\", got \"{}\"", line));
    };
    let x = x
        .parse::<usize>()
        .map_err(|e| format!("Bad x coordinate \"{}\": {}", x, e))?;
    let y = y
        .parse::<usize>()
        .map_err(|e| format!("Bad y coordinate \"{}\": {}", y, e))?;
    Ok(Command::Place(Position::new(x, y)))
}
