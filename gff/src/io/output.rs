use serde::{Deserialize, Serialize};

use crate::config::GFFConfig;
use garage_rs::io::ext_repr::{ExtInstance, ExtSolution};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GFFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: GFFConfig,
}
