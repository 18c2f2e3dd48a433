// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use thiserror::Error;

/// Result type alias using [`TriangulationError`].
pub type Result<T> = std::result::Result<T, TriangulationError>;

/// Errors surfaced by the triangulation engine and the spanning-tree
/// extractor. Recoverable geometric conditions (coincident points, on-edge
/// insertions) are handled internally and never reach this enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangulationError {
    /// A triangulation or bounding-box computation was asked for zero points.
    #[error("no input points to triangulate")]
    EmptyPointSet,

    /// The point-location walk failed to terminate within its step bound.
    #[error("point location walk exceeded {steps} steps")]
    PointLocationOverrun {
        /// The step bound that was exhausted.
        steps: usize,
    },

    /// The legalization flip walk failed to converge within its bound.
    #[error("legalization did not converge after {flips} flip-walk steps (degenerate configuration)")]
    DegenerateConfiguration {
        /// The flip-walk bound that was exhausted.
        flips: usize,
    },

    /// Spanning-tree extraction was requested but the triangulation was built
    /// without retaining its vertices.
    #[error("spanning tree requested but no vertices were retained")]
    NoStoredVertices,
}
