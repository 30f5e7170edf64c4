use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::InstancedQuad;

/// Renderer for `DrawCmd::Line`.
///
/// Each segment is drawn as an oriented quad with butt caps. All lines go out
/// in a single instanced draw, so later lines paint over earlier ones exactly
/// in paint order.
pub struct LineRenderer {
    quad: InstancedQuad,
    instances: Vec<LineInstance>,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self {
            quad: InstancedQuad::new(
                "dial line",
                include_str!("shaders/line.wgsl"),
                LineInstance::layout(),
            ),
            instances: Vec::new(),
        }
    }
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let aa = ctx.aa_width();

        self.instances.clear();
        self.instances.extend(draw_list.iter_in_paint_order().filter_map(|item| {
            let DrawCmd::Line(cmd) = &item.cmd else { return None };
            if cmd.is_degenerate() {
                return None;
            }
            Some(LineInstance {
                p0: [cmd.start.x, cmd.start.y],
                p1: [cmd.end.x, cmd.end.y],
                half_width_aa: [cmd.width * 0.5, aa],
                color: cmd.color.to_array(),
            })
        }));

        self.quad.draw(ctx, target, &self.instances);
    }
}

/// Instance data layout (40 bytes):
///
///  offset  0  p0             [f32; 2]   loc 1
///  offset  8  p1             [f32; 2]   loc 2
///  offset 16  half_width_aa  [f32; 2]   loc 3  (half stroke width, aa width)
///  offset 24  color          [f32; 4]   loc 4  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineInstance {
    p0: [f32; 2],
    p1: [f32; 2],
    half_width_aa: [f32; 2],
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // p0
        2 => Float32x2, // p1
        3 => Float32x2, // half_width_aa
        4 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_offsets() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 40);
        let offsets: Vec<u64> = LineInstance::ATTRS.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 8, 16, 24]);
    }
}
