// Defaults shared by the layout settings and the line-break solver

// Distance between title, footer, legend and the scale/canvas block
pub const DEFAULT_SPACING: f32 = 5.0;

// Space between the canvas border and the outermost ticks
pub const DEFAULT_CANVAS_MARGIN: f32 = 4.0;

// Smallest canvas margin; -1 makes the canvas flush with the scale border distance
pub const MIN_CANVAS_MARGIN: f32 = -1.0;

// Upper bound on fixed-point passes in the line-break solver
pub const MAX_LINE_BREAK_ITERATIONS: usize = 100;
