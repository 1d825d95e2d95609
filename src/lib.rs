//! マンデルブロ集合の面積をモンテカルロ法で推定するライブラリ
//!
//! 複素平面上の矩形領域に候補点をばらまき、発散しなかった点の割合から
//! 集合の面積を推定する。候補点の生成には複数のサンプリング手法
//! （格子走査 / 一様乱数 / ラテン超方格 / 直交 / Halton列）を用意し、
//! サンプル数や反復回数に対する収束の違いを比較できるようにしている。

pub mod common;
