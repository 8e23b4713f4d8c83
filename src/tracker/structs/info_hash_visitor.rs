pub struct InfoHashVisitor;
