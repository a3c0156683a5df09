// ドメイン層 - 梯子の生成と走査

pub mod ladder;
pub mod render;
pub mod walk;
