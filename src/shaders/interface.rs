use serde::{Deserialize, Serialize};

/// The linkable surface of one shader stage.
///
/// This is the record a pipeline orchestrator checks while building the
/// pipeline; a disagreement here is a construction-time failure, never a
/// per-invocation one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageInterface {
    pub source_file_name: String,
    pub entry_point_name: String,
    pub stage: StageKind,
    pub inputs: Vec<Varying>,
    pub outputs: Vec<Varying>,
    pub writes_clip_position: bool,
    pub uniform_blocks: Vec<UniformBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineInterface {
    pub vertex_stage: StageInterface,
    pub fragment_stage: StageInterface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageKind {
    Vertex,
    Fragment,
}

/// A per-vertex input or output, identified by its location index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Varying {
    pub name: String,
    pub location: u32,
    pub component_count: u32,
}

/// A read-only per-draw data block and the slot it binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformBlock {
    pub block_name: String,
    pub set: u32,
    pub binding: u32,
    pub size_bytes: u32,
    pub matrix_layout: MatrixLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixLayout {
    ColumnMajor,
    RowMajor,
}
