use anyhow::{Context, Result, bail};
use dynarray::DynamicArray;
use dynarray::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    if !cli.scenario && cli.growth.is_none() {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    if cli.scenario {
        run_scenario(cli.verbose).context("Scenario failed")?;
        println!("Scenario passed!");
    }
    if let Some(count) = cli.growth {
        run_growth(count, cli.verbose)
            .with_context(|| format!("Growth trace of {count} pushes failed"))?;
    }

    Ok(())
}

fn expect(arr: &DynamicArray<i32>, step: &str, want: &[i32], verbose: u8) -> Result<()> {
    if verbose > 0 {
        println!(
            "{:<16} {:?} (len {}, cap {})",
            step,
            arr,
            arr.len(),
            arr.capacity()
        );
    }
    if arr.as_slice() != want {
        bail!("after {}: expected {:?}, got {:?}", step, want, arr);
    }
    Ok(())
}

fn run_scenario(verbose: u8) -> Result<()> {
    let mut arr = DynamicArray::new();

    arr.try_push_back(1)?;
    arr.try_push_back(2)?;
    arr.try_push_back(3)?;
    expect(&arr, "push_back x3", &[1, 2, 3], verbose)?;
    if arr.capacity() < 3 {
        bail!("capacity {} cannot hold 3 elements", arr.capacity());
    }

    let at = arr.try_insert(1, 9)?;
    expect(&arr, "insert(1, 9)", &[1, 9, 2, 3], verbose)?;

    arr.erase(at);
    expect(&arr, "erase(1)", &[1, 2, 3], verbose)?;

    arr.pop_back();
    expect(&arr, "pop_back", &[1, 2], verbose)?;

    arr.try_shrink_to_fit()?;
    expect(&arr, "shrink_to_fit", &[1, 2], verbose)?;
    if arr.capacity() != 2 {
        bail!("shrink_to_fit left capacity {}", arr.capacity());
    }

    Ok(())
}

fn run_growth(count: usize, verbose: u8) -> Result<()> {
    let mut arr = DynamicArray::new();
    let mut last_cap = arr.capacity();

    for i in 0..count {
        arr.try_push_back(i)?;
        if verbose > 1 {
            println!("push {:>6}: len {:>6}, cap {:>6}", i, arr.len(), arr.capacity());
        }
        if arr.capacity() != last_cap {
            println!("capacity {} -> {}", last_cap, arr.capacity());
            last_cap = arr.capacity();
        }
    }

    if arr.len() != count {
        bail!("expected {} elements, found {}", count, arr.len());
    }
    if let Some((i, v)) = arr.iter().enumerate().find(|(i, v)| *i != **v) {
        bail!("element {} holds {}", i, v);
    }
    println!("{} pushes, final capacity {}", count, arr.capacity());
    Ok(())
}
