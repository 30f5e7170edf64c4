use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::InstancedQuad;

/// Renderer for `DrawCmd::Circle`: filled discs with a one-pixel AA edge.
pub struct CircleRenderer {
    quad: InstancedQuad,
    instances: Vec<CircleInstance>,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self {
            quad: InstancedQuad::new(
                "dial circle",
                include_str!("shaders/circle.wgsl"),
                CircleInstance::layout(),
            ),
            instances: Vec::new(),
        }
    }
}

impl CircleRenderer {
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
            let DrawCmd::Circle(cmd) = &item.cmd else { return None };
            (cmd.radius > 0.0).then(|| CircleInstance {
                center: [cmd.center.x, cmd.center.y],
                radius_aa: [cmd.radius, aa],
                color: cmd.color.to_array(),
            })
        }));

        self.quad.draw(ctx, target, &self.instances);
    }
}

/// Instance data layout (32 bytes):
///
///  offset  0  center     [f32; 2]   loc 1
///  offset  8  radius_aa  [f32; 2]   loc 2  (radius, aa width)
///  offset 16  color      [f32; 4]   loc 3  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_aa: [f32; 2],
    color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius_aa
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
        assert_eq!(CircleInstance::layout().array_stride, 32);
    }
}
