//! `partex init`: project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use partex_core::Catalogue;

use crate::config::{ProjectConfig, CONFIG_FILE};

/// Create `partex.toml` in `dir`, optionally with an example catalogue.
pub fn run(dir: &Path, params: &str, example: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        bail!("'{}' already exists", config_path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    fs::write(&config_path, ProjectConfig::template(params))
        .with_context(|| format!("writing {}", config_path.display()))?;
    println!("Created {}", config_path.display());

    if example {
        let params_path = dir.join(params);
        if params_path.exists() {
            tracing::warn!(path = %params_path.display(), "parameter file exists, example not written");
        } else {
            example_catalogue()
                .save_json(&params_path)
                .with_context(|| format!("writing {}", params_path.display()))?;
            println!("Created {}", params_path.display());
        }
    }

    Ok(())
}

/// A small spiking network model with base and derived parameters.
pub(crate) fn example_catalogue() -> Catalogue {
    let mut pars = Catalogue::new();

    pars.define("N", 10000, "", "network size", "network", "$N$");
    pars.define(
        "gamma",
        0.8,
        "",
        "relative size $N_\\text{E}/N$ of excitatory population",
        "network",
        "$\\gamma$",
    );
    pars.define("K", 1000, "", "in-degree", "connectivity", "$K$");

    pars.define("R", 10.0, "M$\\Omega$", "membrane resistance", "neuron", "$R$");
    pars.define("V_th", 15.0, "mV", "spike threshold", "neuron", "$\\theta$");
    pars.define("tau_m", 10.0, "ms", "membrane time constant", "neuron", "$\\tau_\\text{m}$");

    pars.define("J", 50.0, "pA", "reference synaptic weight", "synapse", "$J$");
    pars.define(
        "g",
        5.0,
        "",
        "relative weight $-J_\\text{I}/J_\\text{E}$ of inhibitory synapses",
        "synapse",
        "$g$",
    );

    pars.define("rX", 20000.0, "spikes/s", "rate of external Poisson sources", "input", "$\\nu_\\text{X}$");

    pars.define("dt", 0.125, "ms", "simulation time resolution", "simulation", "$\\Delta{}t$");
    pars.define("seed", 1234, "", "RNG seed", "simulation", "$\\xi$");

    // derived parameters
    let n: i64 = 10000;
    let n_e = (0.8 * n as f64) as i64;
    pars.define(
        "NE",
        n_e,
        "",
        "size $\\gamma{}N$ of excitatory population",
        "network_drvd",
        "$N_\\text{E}$",
    );
    pars.define(
        "NI",
        n - n_e,
        "",
        "size $(1-\\gamma{})N$ of inhibitory population",
        "network_drvd",
        "$N_\\text{I}$",
    );
    pars.define("JE", 50.0, "pA", "weight $J$ of excitatory synapses", "synapse_drvd", "$J_\\text{E}$");
    pars.define("JI", -5.0 * 50.0, "pA", "weight $-gJ$ of inhibitory synapses", "synapse_drvd", "$J_\\text{I}$");

    pars
}
