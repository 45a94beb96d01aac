/// 有名字的動物；籠子只要求這一點加上 `Ord`
pub trait Animal {
    fn name(&self) -> &str;
}
