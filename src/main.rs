use knapsack_mip::{Item, Knapsack};

fn main() {
    env_logger::init();

    let capacity = 10.0;
    let items = vec![
        Item::new(5.0, 10.0),
        Item::new(4.0, 40.0),
        Item::new(6.0, 30.0),
        Item::new(3.0, 50.0),
    ];

    let result = Knapsack::new(capacity, items).and_then(|knapsack| knapsack.solve());
    let solution = match result {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    println!("Objetos seleccionados:");
    for item in solution.selected() {
        println!("{item}");
    }
    println!("Valor total: {}", solution.total_value());
    println!("Peso total: {}", solution.total_weight());
}
